use sea_orm::DatabaseConnection;

use crate::auth::domain::ApiToken;
use crate::auth::errors::AuthError;
use crate::auth::repository::TokenStore;

pub struct SeaOrmTokenStore {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl TokenStore for SeaOrmTokenStore {
    async fn find(&self, key: &str) -> Result<Option<ApiToken>, AuthError> {
        let found = models::token::find_by_key(&self.db, key)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?;
        Ok(found.map(ApiToken::from))
    }
}
