use chrono::{DateTime, Utc};
use warden_core::{Password, PasswordHasher, ResetToken, UserStore, UserStoreError};

use crate::error::AuthError;

/// Confirm password reset use case - swaps the password for the holder of a
/// live reset token
pub struct ConfirmPasswordResetUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> ConfirmPasswordResetUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    pub async fn execute(&self, token: ResetToken, new_password: Password) -> Result<(), AuthError> {
        self.execute_at(token, new_password, Utc::now()).await
    }

    #[tracing::instrument(name = "ConfirmPasswordResetUseCase::execute", skip_all)]
    pub async fn execute_at(
        &self,
        token: ResetToken,
        new_password: Password,
        now: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        let mut user = self
            .user_store
            .find_by_reset_token(&token)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => AuthError::InvalidToken,
                other => {
                    tracing::error!(error = %other, "Failed to look up reset token");
                    AuthError::InternalFailure(other.to_string())
                }
            })?;

        // A token without an expiry is treated as already expired.
        let live = user.reset_token_expires.is_some_and(|expires| now <= expires);
        if !live {
            tracing::warn!(user_id = %user.id, "Expired reset token presented");
            return Err(AuthError::TokenExpired);
        }

        let digest = self.hasher.hash(&new_password).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AuthError::InternalFailure(e.to_string())
        })?;
        user.set_password_digest(digest, now);
        user.clear_reset_token();

        let user = self.user_store.update(user).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist new password");
            AuthError::InternalFailure(e.to_string())
        })?;

        tracing::info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeHasher, MockUserStore, email, password};
    use chrono::TimeDelta;
    use secrecy::{ExposeSecret, Secret};
    use warden_core::User;

    async fn store_with_token(expires_in: TimeDelta) -> (MockUserStore, ResetToken) {
        let store = MockUserStore::default();
        let now = Utc::now();
        let token = ResetToken::generate();
        let mut user = User::new(
            email("a@x.com"),
            Secret::new("fake-hash:pw1".to_owned()),
            now,
        );
        user.issue_reset_token(token.clone(), now + expires_in, now);
        store.put(user).await;
        (store, token)
    }

    #[tokio::test]
    async fn live_token_sets_new_password_and_is_consumed() {
        let (store, token) = store_with_token(TimeDelta::hours(1)).await;
        let hasher = FakeHasher::default();
        let use_case = ConfirmPasswordResetUseCase::new(&store, &hasher);

        use_case
            .execute(token.clone(), password("newpw"))
            .await
            .unwrap();

        let user = store.get("a@x.com").await;
        assert_eq!(user.password_digest.expose_secret(), "fake-hash:newpw");
        assert!(user.reset_token.is_none());
        assert!(matches!(
            use_case.execute(token, password("again")).await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let (store, _) = store_with_token(TimeDelta::hours(1)).await;
        let hasher = FakeHasher::default();
        let use_case = ConfirmPasswordResetUseCase::new(&store, &hasher);

        let result = use_case
            .execute(ResetToken::generate(), password("newpw"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let (store, token) = store_with_token(TimeDelta::hours(1)).await;
        let hasher = FakeHasher::default();
        let use_case = ConfirmPasswordResetUseCase::new(&store, &hasher);

        let result = use_case
            .execute_at(token, password("newpw"), Utc::now() + TimeDelta::hours(2))
            .await;

        assert!(matches!(result, Err(AuthError::TokenExpired)));
        let user = store.get("a@x.com").await;
        assert_eq!(user.password_digest.expose_secret(), "fake-hash:pw1");
    }

    #[tokio::test]
    async fn token_is_still_accepted_at_its_expiry_instant() {
        let (store, token) = store_with_token(TimeDelta::hours(1)).await;
        let hasher = FakeHasher::default();
        let use_case = ConfirmPasswordResetUseCase::new(&store, &hasher);
        let expires = store.get("a@x.com").await.reset_token_expires.unwrap();

        use_case
            .execute_at(token, password("newpw"), expires)
            .await
            .unwrap();

        let user = store.get("a@x.com").await;
        assert_eq!(user.password_digest.expose_secret(), "fake-hash:newpw");
    }
}
