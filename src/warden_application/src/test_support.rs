//! In-memory doubles for the ports, shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::TimeDelta;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use warden_core::{
    AccountEvent, BlockList, BlockListError, Email, EventPublisher, EventPublisherError, Password,
    PasswordHasher, PasswordHasherError, ResetToken, ThrottlePolicy, TokenConfig, TokenEngine,
    User, UserId, UserStore, UserStoreError,
};

use crate::config::{EventTopics, IdentityConfig, ResetPolicy};

#[derive(Default, Clone)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    fail_updates: Arc<AtomicBool>,
}

impl MockUserStore {
    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub async fn get(&self, email: &str) -> User {
        let email = Email::try_from(email).unwrap();
        self.find_by_email(&email).await.unwrap()
    }

    pub async fn put(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn create(&self, user: User) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, UserStoreError> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(UserStoreError::UnexpectedError("write refused".to_owned()));
        }
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let slot = users.get_mut(&user.id).ok_or(UserStoreError::UserNotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_reset_token(&self, token: &ResetToken) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.reset_token.as_ref() == Some(token))
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

/// Stores `fake-hash:<password>` so digests are predictable.
#[derive(Default, Clone)]
pub struct FakeHasher {
    broken: bool,
}

impl FakeHasher {
    pub fn broken() -> Self {
        Self { broken: true }
    }
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError> {
        if self.broken {
            return Err(PasswordHasherError::UnexpectedError("broken".to_owned()));
        }
        Ok(Secret::new(format!(
            "fake-hash:{}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        digest: &Secret<String>,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        if self.broken {
            return Err(PasswordHasherError::UnexpectedError("broken".to_owned()));
        }
        let expected = format!("fake-hash:{}", candidate.as_ref().expose_secret());
        if digest.expose_secret() == &expected {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }
}

#[derive(Default, Clone)]
pub struct MockBlockList {
    entries: Arc<RwLock<HashMap<String, Duration>>>,
}

#[async_trait]
impl BlockList for MockBlockList {
    async fn add(&self, key: &str, ttl: Duration) -> Result<(), BlockListError> {
        self.entries.write().await.insert(key.to_owned(), ttl);
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool, BlockListError> {
        Ok(self.entries.read().await.contains_key(key))
    }
}

#[derive(Default, Clone)]
pub struct RecordingPublisher {
    events: Arc<RwLock<Vec<(String, AccountEvent)>>>,
    failing: bool,
}

impl RecordingPublisher {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub async fn events(&self) -> Vec<(String, AccountEvent)> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, topic: &str, event: &AccountEvent) -> Result<(), EventPublisherError> {
        if self.failing {
            return Err(EventPublisherError::PublishFailed("bus unavailable".to_owned()));
        }
        self.events
            .write()
            .await
            .push((topic.to_owned(), event.clone()));
        Ok(())
    }
}

pub fn token_engine() -> TokenEngine<MockBlockList> {
    TokenEngine::new(
        TokenConfig {
            jwt_secret: Secret::new("test-secret".to_owned()),
            access_token_ttl: TimeDelta::minutes(15),
            refresh_token_ttl: TimeDelta::days(4),
        },
        MockBlockList::default(),
    )
}

pub fn identity_config(min_secs_between_attempts: i64) -> IdentityConfig {
    IdentityConfig {
        throttle: ThrottlePolicy::new(
            3,
            TimeDelta::minutes(1),
            TimeDelta::seconds(min_secs_between_attempts),
        )
        .unwrap(),
        reset: ResetPolicy {
            token_ttl: TimeDelta::hours(24),
        },
        topics: EventTopics {
            account_created: "account-created".to_owned(),
            account_blocked: "account-blocked".to_owned(),
            password_reset: "password-reset".to_owned(),
        },
    }
}

pub fn email(raw: &str) -> Email {
    Email::try_from(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(raw).unwrap()
}
