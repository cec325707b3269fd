use chrono::{DateTime, Utc};
use warden_core::{Email, Password, PasswordHasher, UserId, UserStore, UserStoreError};

use super::current_user::UserProfile;
use crate::error::AuthError;

/// Update profile use case - changes the email and, when given, the password
/// of the session owner
pub struct UpdateProfileUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> UpdateProfileUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        email: Option<Email>,
        new_password: Option<Password>,
    ) -> Result<UserProfile, AuthError> {
        self.execute_at(user_id, email, new_password, Utc::now())
            .await
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, email, new_password))]
    pub async fn execute_at(
        &self,
        user_id: UserId,
        email: Option<Email>,
        new_password: Option<Password>,
        now: DateTime<Utc>,
    ) -> Result<UserProfile, AuthError> {
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

        if let Some(email) = email.filter(|email| *email != user.email) {
            match self.user_store.find_by_email(&email).await {
                Ok(owner) if owner.id != user.id => {
                    tracing::warn!(%user_id, "Email change onto an existing account");
                    return Err(AuthError::UserAlreadyExists);
                }
                Ok(_) | Err(UserStoreError::UserNotFound) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Failed to check email availability");
                    return Err(AuthError::InternalFailure(e.to_string()));
                }
            }
            user.change_email(email, now);
        }

        if let Some(new_password) = new_password {
            let digest = self.hasher.hash(&new_password).await.map_err(|e| {
                tracing::error!(error = %e, "Failed to hash password");
                AuthError::InternalFailure(e.to_string())
            })?;
            user.set_password_digest(digest, now);
            user.clear_reset_token();
        }

        let user = self.user_store.update(user).await.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => AuthError::UserAlreadyExists,
            other => {
                tracing::error!(error = %other, "Failed to persist profile");
                AuthError::InternalFailure(other.to_string())
            }
        })?;

        tracing::info!(%user_id, "Profile updated");
        Ok(user.into())
    }
}
