use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use warden_core::{Email, ResetToken, User, UserId, UserStore, UserStoreError};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn create(&self, user: User) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let stored = users.get_mut(&user.id).ok_or(UserStoreError::UserNotFound)?;
        *stored = user.clone();
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users.get(id).cloned().ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| &user.email == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_reset_token(&self, token: &ResetToken) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| user.reset_token.as_ref() == Some(token))
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}
