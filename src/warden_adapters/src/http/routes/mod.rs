mod change_password;
mod confirm_password_reset;
pub mod error;
mod is_user_authenticated;
mod login;
mod logout;
mod refresh;
mod register;
mod request_password_reset;
mod session;
mod user;

use std::sync::Arc;

use axum::http::{HeaderMap, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};
use warden_application::IdentityService;

pub use change_password::change_password;
pub use confirm_password_reset::confirm_password_reset;
pub use is_user_authenticated::is_user_authenticated;
pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;
pub use request_password_reset::request_password_reset;
pub use user::{UpdateUserRequest, UserResponse, current_user, update_user};

use error::AuthApiError;

/// Router state shared by every handler.
pub type SharedIdentityService<U, H, B, P> = Arc<IdentityService<U, H, B, P>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthApiError::MissingToken)?
        .to_str()
        .map_err(|_| AuthApiError::MissingToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthApiError::MissingToken)?;

    Ok(token)
}
