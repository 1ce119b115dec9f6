use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, Method},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tracing::debug;

use service::auth::{repo::SeaOrmTokenStore, AuthService, TokenStore};

use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: AuthService,
}

impl ServerState {
    /// Tokens are looked up in the same database the resources live in.
    pub fn new(db: DatabaseConnection) -> Self {
        let store = Arc::new(SeaOrmTokenStore { db: db.clone() });
        Self::with_token_store(db, store)
    }

    pub fn with_token_store(db: DatabaseConnection, store: Arc<dyn TokenStore>) -> Self {
        Self { db, auth: AuthService::new(store) }
    }
}

fn is_write(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Middleware: require `Authorization: Token <key>`; writes need a write-enabled token.
pub async fn require_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let write = is_write(req.method());

    let token = state.auth.authenticate(header.as_deref(), write).await?;
    debug!(user = %token.user, token_id = token.id, write, "request authenticated");
    req.extensions_mut().insert(token);
    Ok(next.run(req).await)
}
