use async_trait::async_trait;

use super::domain::ApiToken;
use super::errors::AuthError;

/// Lookup of API tokens by key.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn find(&self, key: &str) -> Result<Option<ApiToken>, AuthError>;
}

/// Simple in-memory store for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryTokenStore {
        tokens: Mutex<HashMap<String, ApiToken>>, // key: token key
    }

    impl MemoryTokenStore {
        pub fn insert(&self, token: ApiToken) -> Result<(), AuthError> {
            let mut tokens = self.tokens.lock().map_err(|e| AuthError::Store(e.to_string()))?;
            tokens.insert(token.key.clone(), token);
            Ok(())
        }

        /// Store seeded with the given `(key, write_enabled)` pairs, none expiring.
        pub fn with_keys(keys: &[(&str, bool)]) -> Result<Self, AuthError> {
            let store = Self::default();
            for (n, (key, write_enabled)) in keys.iter().enumerate() {
                store.insert(ApiToken {
                    id: n as i32 + 1,
                    key: (*key).to_string(),
                    user: "test".to_string(),
                    write_enabled: *write_enabled,
                    expires: None,
                })?;
            }
            Ok(store)
        }
    }

    #[async_trait]
    impl TokenStore for MemoryTokenStore {
        async fn find(&self, key: &str) -> Result<Option<ApiToken>, AuthError> {
            let tokens = self.tokens.lock().map_err(|e| AuthError::Store(e.to_string()))?;
            Ok(tokens.get(key).cloned())
        }
    }
}
