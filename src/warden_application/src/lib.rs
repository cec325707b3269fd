pub mod config;
pub mod error;
pub mod identity_service;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{EventTopics, IdentityConfig, ResetPolicy};
pub use error::AuthError;
pub use identity_service::IdentityService;
pub use use_cases::{
    change_password::ChangePasswordUseCase,
    confirm_password_reset::ConfirmPasswordResetUseCase,
    current_user::{CurrentUserUseCase, UserProfile},
    login::LoginUseCase,
    logout::LogoutUseCase,
    refresh::RefreshUseCase,
    register::{RegisterUseCase, RegisteredUser},
    request_password_reset::{PasswordResetTicket, RequestPasswordResetUseCase},
    update_profile::UpdateProfileUseCase,
    verify_token::VerifyTokenUseCase,
};
