use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::{email::Email, password::Password, reset_token::ResetToken};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError>;
    async fn verify(
        &self,
        digest: &Secret<String>,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError>;
}

#[derive(Debug, Error)]
pub enum EventPublisherError {
    #[error("Failed to publish event: {0}")]
    PublishFailed(String),
}

/// Domain events fanned out to external consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AccountEvent {
    AccountCreated {
        #[serde(serialize_with = "expose_email")]
        email: Email,
    },
    AccountBlocked {
        #[serde(serialize_with = "expose_email")]
        email: Email,
        blocked_until: DateTime<Utc>,
    },
    PasswordResetRequested {
        #[serde(serialize_with = "expose_email")]
        email: Email,
        reset_token: ResetToken,
        expires_at: DateTime<Utc>,
    },
}

fn expose_email<S: Serializer>(email: &Email, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(email.as_ref().expose_secret())
}

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, event: &AccountEvent) -> Result<(), EventPublisherError>;
}
