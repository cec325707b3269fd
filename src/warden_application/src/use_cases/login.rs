use chrono::{DateTime, Utc};
use warden_core::{
    AccountEvent, BlockList, Email, EventPublisher, LoginGate, Password, PasswordHasher,
    PasswordHasherError, ThrottlePolicy, ThrottleRejection, TokenEngine, TokenPair, UserStore,
    UserStoreError,
};

use crate::error::AuthError;

/// Login use case - verifies credentials under the throttle policy and
/// mints a session
pub struct LoginUseCase<'a, U, H, B, P>
where
    U: UserStore,
    H: PasswordHasher,
    B: BlockList,
    P: EventPublisher,
{
    user_store: &'a U,
    hasher: &'a H,
    tokens: &'a TokenEngine<B>,
    publisher: &'a P,
    policy: &'a ThrottlePolicy,
    blocked_topic: &'a str,
}

impl<'a, U, H, B, P> LoginUseCase<'a, U, H, B, P>
where
    U: UserStore,
    H: PasswordHasher,
    B: BlockList,
    P: EventPublisher,
{
    pub fn new(
        user_store: &'a U,
        hasher: &'a H,
        tokens: &'a TokenEngine<B>,
        publisher: &'a P,
        policy: &'a ThrottlePolicy,
        blocked_topic: &'a str,
    ) -> Self {
        Self {
            user_store,
            hasher,
            tokens,
            publisher,
            policy,
            blocked_topic,
        }
    }

    pub async fn execute(&self, email: Email, password: Password) -> Result<TokenPair, AuthError> {
        self.execute_at(email, password, Utc::now()).await
    }

    /// Execute the login use case as of `now`
    ///
    /// Unknown accounts and wrong passwords both surface as
    /// `InvalidCredentials`.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, email, password))]
    pub async fn execute_at(
        &self,
        email: Email,
        password: Password,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, AuthError> {
        let mut user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load user for login");
                return Err(AuthError::InternalFailure(e.to_string()));
            }
        };

        match self.policy.gate(&user, now) {
            Ok(LoginGate::Open) => {}
            Ok(LoginGate::BlockLapsed) => {
                user.unblock();
                user = self.user_store.update(user).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to persist unblock");
                    AuthError::InternalFailure(e.to_string())
                })?;
                tracing::info!(user_id = %user.id, "Block window elapsed, account unblocked");
            }
            Err(ThrottleRejection::AccountBlocked { until }) => {
                tracing::warn!(user_id = %user.id, %until, "Login attempt on blocked account");
                return Err(AuthError::AccountBlocked { until });
            }
            Err(ThrottleRejection::TooManyAttempts) => {
                tracing::warn!(user_id = %user.id, "Login attempt inside debounce window");
                return Err(AuthError::TooManyAttempts);
            }
        }

        match self.hasher.verify(&user.password_digest, &password).await {
            Ok(()) => {}
            Err(PasswordHasherError::Mismatch) => {
                let blocked_until = self.policy.record_failure(&mut user, now);
                tracing::warn!(
                    user_id = %user.id,
                    failed_attempts = user.failed_attempts,
                    "Login failed with wrong password"
                );

                if let Some(until) = blocked_until {
                    tracing::warn!(user_id = %user.id, %until, "Account blocked");
                    let event = AccountEvent::AccountBlocked {
                        email: user.email.clone(),
                        blocked_until: until,
                    };
                    if let Err(e) = self.publisher.publish(self.blocked_topic, &event).await {
                        tracing::error!(error = %e, "Failed to publish account blocked event");
                    }
                }

                if let Err(e) = self.user_store.update(user).await {
                    tracing::error!(error = %e, "Failed to persist failed login attempt");
                }
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification failed");
                return Err(AuthError::InternalFailure(e.to_string()));
            }
        }

        user.record_successful_login(now);
        let user_id = user.id;
        if let Err(e) = self.user_store.update(user).await {
            tracing::error!(error = %e, %user_id, "Failed to persist successful login");
        }

        let pair = self.tokens.mint_pair_at(user_id, now)?;
        tracing::info!(%user_id, "User logged in");
        Ok(pair)
    }
}
