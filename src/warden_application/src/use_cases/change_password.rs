use chrono::Utc;
use warden_core::{Password, PasswordHasher, UserId, UserStore, UserStoreError};

use crate::error::AuthError;

/// Change password use case - for an already authenticated user
pub struct ChangePasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> ChangePasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip(self, new_password))]
    pub async fn execute(&self, user_id: UserId, new_password: Password) -> Result<(), AuthError> {
        let mut user = self
            .user_store
            .find_by_id(&user_id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => AuthError::UserNotFound,
                other => {
                    tracing::error!(error = %other, "Failed to load user");
                    AuthError::InternalFailure(other.to_string())
                }
            })?;

        let digest = self.hasher.hash(&new_password).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AuthError::InternalFailure(e.to_string())
        })?;
        user.set_password_digest(digest, Utc::now());
        user.clear_reset_token();

        self.user_store.update(user).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist new password");
            AuthError::InternalFailure(e.to_string())
        })?;

        tracing::info!("Password changed");
        Ok(())
    }
}
