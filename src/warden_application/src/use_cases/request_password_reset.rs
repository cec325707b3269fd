use chrono::{DateTime, Utc};
use warden_core::{AccountEvent, Email, EventPublisher, ResetToken, UserStore, UserStoreError};

use crate::{config::ResetPolicy, error::AuthError};

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordResetTicket {
    pub reset_token: ResetToken,
    pub expires_at: DateTime<Utc>,
}

/// Request password reset use case - issues a reset token and hands it to the
/// event bus for delivery
pub struct RequestPasswordResetUseCase<'a, U, P>
where
    U: UserStore,
    P: EventPublisher,
{
    user_store: &'a U,
    publisher: &'a P,
    policy: &'a ResetPolicy,
    topic: &'a str,
}

impl<'a, U, P> RequestPasswordResetUseCase<'a, U, P>
where
    U: UserStore,
    P: EventPublisher,
{
    pub fn new(user_store: &'a U, publisher: &'a P, policy: &'a ResetPolicy, topic: &'a str) -> Self {
        Self {
            user_store,
            publisher,
            policy,
            topic,
        }
    }

    /// A failed publish fails the whole request since the token could never
    /// reach the user.
    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email) -> Result<PasswordResetTicket, AuthError> {
        let now = Utc::now();
        let mut user = self
            .user_store
            .find_by_email(&email)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => AuthError::UserNotFound,
                other => {
                    tracing::error!(error = %other, "Failed to load user for password reset");
                    AuthError::InternalFailure(other.to_string())
                }
            })?;

        let expires_at = now
            .checked_add_signed(self.policy.token_ttl)
            .ok_or_else(|| AuthError::InternalFailure("reset expiry out of range".to_owned()))?;
        let reset_token = ResetToken::generate();
        user.issue_reset_token(reset_token.clone(), expires_at, now);

        let user = self.user_store.update(user).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to store reset token");
            AuthError::InternalFailure(e.to_string())
        })?;

        let event = AccountEvent::PasswordResetRequested {
            email: user.email.clone(),
            reset_token: reset_token.clone(),
            expires_at,
        };
        self.publisher
            .publish(self.topic, &event)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %user.id, "Failed to publish password reset event");
                AuthError::InternalFailure(e.to_string())
            })?;

        tracing::info!(user_id = %user.id, "Password reset requested");
        Ok(PasswordResetTicket {
            reset_token,
            expires_at,
        })
    }
}
