use chrono::{DateTime, Utc};
use thiserror::Error;
use warden_core::{TokenError, UserError};

/// Every failure an identity operation can report.
///
/// `InternalFailure` carries diagnostic detail for logs only.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account is blocked until {until}")]
    AccountBlocked { until: DateTime<Utc> },
    #[error("Too many attempts")]
    TooManyAttempts,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token has been revoked")]
    TokenRevoked,
    #[error("Token has expired")]
    TokenExpired,
    #[error("User not found")]
    UserNotFound,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl From<TokenError> for AuthError {
    fn from(value: TokenError) -> Self {
        match value {
            TokenError::InvalidToken => Self::InvalidToken,
            TokenError::TokenRevoked => Self::TokenRevoked,
            other => Self::InternalFailure(other.to_string()),
        }
    }
}

impl From<UserError> for AuthError {
    fn from(value: UserError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}
