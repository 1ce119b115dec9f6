use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Field-scoped validation failure, rendered as `field: message`.
    pub fn invalid(field: &str, msg: impl Display) -> Self {
        Self::Validation(format!("{field}: {msg}"))
    }
}
