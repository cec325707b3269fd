use chrono::Utc;
use warden_core::{
    AccountEvent, Email, EventPublisher, Password, PasswordHasher, User, UserId, UserStore,
    UserStoreError,
};

use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    pub id: UserId,
    pub email: Email,
}

/// Register use case - creates a new account and announces it
pub struct RegisterUseCase<'a, U, H, P>
where
    U: UserStore,
    H: PasswordHasher,
    P: EventPublisher,
{
    user_store: &'a U,
    hasher: &'a H,
    publisher: &'a P,
    topic: &'a str,
}

impl<'a, U, H, P> RegisterUseCase<'a, U, H, P>
where
    U: UserStore,
    H: PasswordHasher,
    P: EventPublisher,
{
    pub fn new(user_store: &'a U, hasher: &'a H, publisher: &'a P, topic: &'a str) -> Self {
        Self {
            user_store,
            hasher,
            publisher,
            topic,
        }
    }

    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<RegisteredUser, AuthError> {
        match self.user_store.find_by_email(&email).await {
            Ok(_) => return Err(AuthError::UserAlreadyExists),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to look up user during registration");
                return Err(AuthError::InternalFailure(e.to_string()));
            }
        }

        let digest = self.hasher.hash(&password).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AuthError::InternalFailure(e.to_string())
        })?;

        let user = self
            .user_store
            .create(User::new(email, digest, Utc::now()))
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => AuthError::UserAlreadyExists,
                other => {
                    tracing::error!(error = %other, "Failed to create user");
                    AuthError::InternalFailure(other.to_string())
                }
            })?;

        let event = AccountEvent::AccountCreated {
            email: user.email.clone(),
        };
        if let Err(e) = self.publisher.publish(self.topic, &event).await {
            tracing::error!(error = %e, user_id = %user.id, "Failed to publish account created event");
        }

        tracing::info!(user_id = %user.id, "User registered");
        Ok(RegisteredUser {
            id: user.id,
            email: user.email,
        })
    }
}
