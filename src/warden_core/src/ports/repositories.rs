use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, reset_token::ResetToken, user::User, user_id::UserId};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: User) -> Result<User, UserStoreError>;
    /// Persists every mutable field of `user`, matched by id.
    async fn update(&self, user: User) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn find_by_reset_token(&self, token: &ResetToken) -> Result<User, UserStoreError>;
}

// BlockList port trait and errors
#[derive(Debug, Error)]
pub enum BlockListError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Revocation registry for token identifiers. Entries disappear once their
/// TTL elapses.
#[async_trait]
pub trait BlockList: Send + Sync {
    async fn add(&self, key: &str, ttl: Duration) -> Result<(), BlockListError>;
    async fn contains(&self, key: &str) -> Result<bool, BlockListError>;
}
