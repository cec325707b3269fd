use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use warden_application::AuthError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Account is temporarily blocked")]
    AccountBlocked,

    #[error("Too many attempts, try again later")]
    TooManyAttempts,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Unable to process request")]
    RequestRejected,

    #[error("User not found")]
    UserNotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_)
            | AuthApiError::TokenExpired
            | AuthApiError::RequestRejected => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::UserAlreadyExists => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::MissingToken
            | AuthApiError::InvalidCredentials
            | AuthApiError::AuthenticationError(_) => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::AccountBlocked => (StatusCode::FORBIDDEN, self.to_string()),

            AuthApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            AuthApiError::TooManyAttempts => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),

            AuthApiError::UnexpectedError(detail) => {
                tracing::error!(%detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidInput(reason) => AuthApiError::InvalidInput(reason),
            AuthError::UserAlreadyExists => AuthApiError::UserAlreadyExists,
            AuthError::InvalidCredentials => AuthApiError::InvalidCredentials,
            AuthError::InvalidToken | AuthError::TokenRevoked => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            AuthError::AccountBlocked { .. } => AuthApiError::AccountBlocked,
            AuthError::TooManyAttempts => AuthApiError::TooManyAttempts,
            AuthError::TokenExpired => AuthApiError::TokenExpired,
            AuthError::UserNotFound => AuthApiError::RequestRejected,
            AuthError::InternalFailure(detail) => AuthApiError::UnexpectedError(detail),
        }
    }
}
