use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use tracing::error;

/// Error response rendered as `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("internal server error".into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.title, "message": self.message });
        let mut res = (self.status, Json(body)).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            res.headers_mut().insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Token"));
        }
        res
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg.clone())),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", Some(msg.clone())),
            _ if e.is_validation() => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.detail())),
            _ => {
                error!(err = %e, "request failed");
                Self::internal()
            }
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            _ if e.is_forbidden() => Self::new(StatusCode::FORBIDDEN, "Forbidden", Some(e.to_string())),
            AuthError::Store(_) => {
                error!(err = %e, code = e.code(), "token lookup failed");
                Self::internal()
            }
            _ => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string())),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(r.body_text()))
    }
}

impl From<FormRejection> for JsonApiError {
    fn from(r: FormRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(r.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(r.body_text()))
    }
}

/// Ids are integers; anything else names no record.
impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(r.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("x".into()), StatusCode::CONFLICT),
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::invalid("slug", "bad")), StatusCode::BAD_REQUEST),
            (ServiceError::Db("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn auth_errors_split_401_and_403() {
        assert_eq!(JsonApiError::from(AuthError::Missing).status, StatusCode::UNAUTHORIZED);
        assert_eq!(JsonApiError::from(AuthError::Expired).status, StatusCode::UNAUTHORIZED);
        assert_eq!(JsonApiError::from(AuthError::ReadOnly).status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn unauthorized_advertises_token_scheme() {
        let res = JsonApiError::from(AuthError::Invalid).into_response();
        assert_eq!(res.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Token");
    }
}
