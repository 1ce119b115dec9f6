//! Request bodies for create and replace: JSON, or an HTML-style form.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Field mapping decoded according to `Content-Type`. Form bodies are decoded
/// as urlencoded fields; anything else goes through the JSON extractor and
/// keeps its rejections.
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Termination {
        term_side: String,
        port_speed: i32,
        #[serde(default)]
        xconnect_id: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/circuittermination/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn decode(req: Request) -> Result<Termination, JsonApiError> {
        Payload::<Termination>::from_request(req, &()).await.map(|Payload(v)| v)
    }

    #[tokio::test]
    async fn decodes_json() {
        let req = request(Some("application/json"), r#"{"term_side":"Z","port_speed":1000000}"#);
        let t = decode(req).await.unwrap();
        assert_eq!(t, Termination { term_side: "Z".into(), port_speed: 1_000_000, xconnect_id: String::new() });
    }

    #[tokio::test]
    async fn decodes_form_with_numeric_fields() {
        let req = request(Some("application/x-www-form-urlencoded; charset=UTF-8"), "term_side=A&port_speed=1000000&xconnect_id=XC+1");
        let t = decode(req).await.unwrap();
        assert_eq!(t.port_speed, 1_000_000);
        assert_eq!(t.xconnect_id, "XC 1");
    }

    #[tokio::test]
    async fn malformed_form_is_400() {
        let req = request(Some(FORM_CONTENT_TYPE), "term_side=A&port_speed=fast");
        assert_eq!(decode(req).await.unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn other_content_types_fall_back_to_json_rejection() {
        let req = request(Some("text/plain"), "term_side=A");
        assert_eq!(decode(req).await.unwrap_err().status, StatusCode::BAD_REQUEST);
        let req = request(None, "{}");
        assert_eq!(decode(req).await.unwrap_err().status, StatusCode::BAD_REQUEST);
    }
}
