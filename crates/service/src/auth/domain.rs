use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated caller as seen by the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: i32,
    pub key: String,
    pub user: String,
    pub write_enabled: bool,
    pub expires: Option<DateTime<Utc>>,
}

impl ApiToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|e| e <= now)
    }
}

impl From<models::token::Model> for ApiToken {
    fn from(m: models::token::Model) -> Self {
        Self {
            id: m.id,
            key: m.key,
            user: m.user,
            write_enabled: m.write_enabled,
            expires: m.expires.map(|e| e.with_timezone(&Utc)),
        }
    }
}
