use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

/// API credential presented as `Authorization: Token <key>`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "api_token")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub key: String,
    pub user: String,
    pub write_enabled: bool,
    pub expires: Option<DateTimeWithTimeZone>,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            self.created_at = Set(Utc::now().into());
        }
        Ok(self)
    }
}

impl Model {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|e| e <= now)
    }
}

pub const KEY_LEN: usize = 40;

/// 40 lowercase hex characters from 20 random bytes.
pub fn generate_key() -> String {
    let bytes: [u8; 20] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

pub fn validate_key(key: &str) -> Result<(), ModelError> {
    validate::required_text("key", key, KEY_LEN)?;
    if key.chars().any(char::is_whitespace) {
        return Err(ModelError::invalid("key", "may not contain whitespace"));
    }
    Ok(())
}

/// Issue a token with a freshly generated key.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    user: &str,
    write_enabled: bool,
    expires: Option<DateTimeWithTimeZone>,
) -> Result<Model, ModelError> {
    insert_with_key(db, &generate_key(), user, write_enabled, expires).await
}

pub async fn insert_with_key<C: ConnectionTrait>(
    db: &C,
    key: &str,
    user: &str,
    write_enabled: bool,
    expires: Option<DateTimeWithTimeZone>,
) -> Result<Model, ModelError> {
    validate_key(key)?;
    validate::required_text("user", user, 150)?;
    let am = ActiveModel {
        key: Set(key.to_string()),
        user: Set(user.to_string()),
        write_enabled: Set(write_enabled),
        expires: Set(expires),
        description: Set(String::new()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_key<C: ConnectionTrait>(db: &C, key: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Key.eq(key))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert a write-enabled token with the given key unless one already exists.
pub async fn ensure<C: ConnectionTrait>(db: &C, key: &str, user: &str) -> Result<Model, ModelError> {
    if let Some(existing) = find_by_key(db, key).await? {
        return Ok(existing);
    }
    insert_with_key(db, key, user, true, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_40_hex_chars() {
        let k = generate_key();
        assert_eq!(k.len(), KEY_LEN);
        assert!(k.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(k, generate_key());
    }

    #[test]
    fn key_validation() {
        assert!(validate_key("abc").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("has space").is_err());
        assert!(validate_key(&"a".repeat(41)).is_err());
    }
}
