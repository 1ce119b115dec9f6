use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument, warn};

use super::domain::ApiToken;
use super::errors::AuthError;
use super::repository::TokenStore;
use crate::errors::ServiceError;

/// Split an `Authorization` header value into its token key.
///
/// The scheme is matched case-insensitively.
///
/// # Examples
/// ```
/// use service::auth::service::parse_authorization;
/// assert_eq!(parse_authorization(Some("Token abc123")).unwrap(), "abc123");
/// assert!(parse_authorization(Some("Bearer abc123")).is_err());
/// ```
pub fn parse_authorization(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::Missing)?;
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(key), None) if scheme.eq_ignore_ascii_case("token") => Ok(key),
        _ => Err(AuthError::Malformed),
    }
}

/// Token authentication independent of web framework
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn TokenStore>) -> Self { Self { store } }

    /// Resolve the caller's token and check it may perform the request.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, repository::mock::MemoryTokenStore};
    /// use std::sync::Arc;
    /// let store = MemoryTokenStore::with_keys(&[("abc123", false)]).unwrap();
    /// let svc = AuthService::new(Arc::new(store));
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// assert!(rt.block_on(svc.authenticate(Some("Token abc123"), false)).is_ok());
    /// assert!(rt.block_on(svc.authenticate(Some("Token abc123"), true)).is_err());
    /// ```
    #[instrument(skip(self, header))]
    pub async fn authenticate(&self, header: Option<&str>, write: bool) -> Result<ApiToken, AuthError> {
        self.authenticate_at(header, write, Utc::now()).await
    }

    pub async fn authenticate_at(
        &self,
        header: Option<&str>,
        write: bool,
        now: DateTime<Utc>,
    ) -> Result<ApiToken, AuthError> {
        let key = parse_authorization(header)?;
        let token = self.store.find(key).await?.ok_or(AuthError::Invalid)?;
        if token.is_expired(now) {
            debug!(token_id = token.id, "expired token presented");
            return Err(AuthError::Expired);
        }
        if write && !token.write_enabled {
            return Err(AuthError::ReadOnly);
        }
        Ok(token)
    }
}

/// Make sure the configured bootstrap key can authenticate.
pub async fn ensure_bootstrap_token(db: &DatabaseConnection, key: &str, user: &str) -> Result<ApiToken, ServiceError> {
    let token = models::token::ensure(db, key, user).await?;
    if !token.write_enabled {
        warn!(token_id = token.id, "bootstrap token exists but is read-only");
    }
    info!(token_id = token.id, user = %token.user, "bootstrap token ready");
    Ok(token.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::SeaOrmTokenStore;
    use crate::auth::repository::mock::MemoryTokenStore;
    use crate::test_support::get_db;
    use chrono::Duration;

    fn service(store: MemoryTokenStore) -> AuthService {
        AuthService::new(Arc::new(store))
    }

    #[test]
    fn parse_accepts_any_scheme_case() {
        assert_eq!(parse_authorization(Some("token abc")).unwrap(), "abc");
        assert_eq!(parse_authorization(Some("TOKEN abc")).unwrap(), "abc");
        assert!(matches!(parse_authorization(None), Err(AuthError::Missing)));
        assert!(matches!(parse_authorization(Some("Token")), Err(AuthError::Malformed)));
        assert!(matches!(parse_authorization(Some("Token a b")), Err(AuthError::Malformed)));
    }

    #[tokio::test]
    async fn unknown_key_is_invalid() {
        let svc = service(MemoryTokenStore::with_keys(&[("known", true)]).unwrap());
        let err = svc.authenticate(Some("Token unknown"), false).await.unwrap_err();
        assert!(matches!(err, AuthError::Invalid));
    }

    #[tokio::test]
    async fn read_only_token_cannot_write() {
        let svc = service(MemoryTokenStore::with_keys(&[("ro", false), ("rw", true)]).unwrap());
        assert!(svc.authenticate(Some("Token ro"), false).await.is_ok());
        let err = svc.authenticate(Some("Token ro"), true).await.unwrap_err();
        assert!(err.is_forbidden());
        assert!(svc.authenticate(Some("Token rw"), true).await.is_ok());
    }

    #[tokio::test]
    async fn expired_token_is_refused() {
        let store = MemoryTokenStore::default();
        let now = Utc::now();
        store
            .insert(ApiToken {
                id: 1,
                key: "old".into(),
                user: "test".into(),
                write_enabled: true,
                expires: Some(now - Duration::hours(1)),
            })
            .unwrap();
        let svc = service(store);
        let err = svc.authenticate_at(Some("Token old"), false, now).await.unwrap_err();
        assert!(matches!(err, AuthError::Expired));
    }

    #[tokio::test]
    async fn bootstrap_token_is_usable_through_the_database() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = ensure_bootstrap_token(&db, "0123456789abcdef", "admin").await?;
        let again = ensure_bootstrap_token(&db, "0123456789abcdef", "admin").await?;
        assert_eq!(created.id, again.id);

        let svc = AuthService::new(Arc::new(SeaOrmTokenStore { db: db.clone() }));
        let token = svc.authenticate(Some("Token 0123456789abcdef"), true).await?;
        assert_eq!(token.user, "admin");
        Ok(())
    }
}
