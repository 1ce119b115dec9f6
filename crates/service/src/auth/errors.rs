use thiserror::Error;

/// Reasons a request is refused before it reaches a resource
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication credentials were not provided")]
    Missing,
    #[error("invalid authorization header, expected `Token <key>`")]
    Malformed,
    #[error("invalid token")]
    Invalid,
    #[error("token expired")]
    Expired,
    #[error("this token does not permit write operations")]
    ReadOnly,
    #[error("token store error: {0}")]
    Store(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Missing => 1001,
            AuthError::Malformed => 1002,
            AuthError::Invalid => 1003,
            AuthError::Expired => 1004,
            AuthError::ReadOnly => 1005,
            AuthError::Store(_) => 1200,
        }
    }

    /// Refused because of the token's permissions rather than its validity.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AuthError::ReadOnly)
    }
}
