use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    /// Client-facing detail without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Conflict(m) | Self::Db(m) => m.clone(),
            Self::Model(ModelError::Validation(m)) | Self::Model(ModelError::Db(m)) => m.clone(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(ModelError::Validation(_)))
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            // Races past the pre-insert checks end up here.
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Validation(format!("duplicate value: {msg}")),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Conflict(format!("referenced row: {msg}")),
            _ => Self::Db(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_validation_is_a_validation_error() {
        let err: ServiceError = ModelError::invalid("slug", "bad").into();
        assert!(err.is_validation());
        assert_eq!(err.detail(), "slug: bad");
    }

    #[test]
    fn plain_db_errors_stay_internal() {
        let err: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, ServiceError::Db(_)));
    }
}
