use warden_core::{Email, User, UserId, UserStore, UserStoreError};

use crate::error::AuthError;

/// Public view of an account.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Current user use case - loads the profile of the session owner
pub struct CurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> CurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "CurrentUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: UserId) -> Result<UserProfile, AuthError> {
        let user = self
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

        Ok(user.into())
    }
}
