use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;

use super::{email::Email, reset_token::ResetToken, user_id::UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid password")]
    InvalidPassword,
}

/// A registered account together with its throttle and reset state.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_digest: Secret<String>,
    pub failed_attempts: u32,
    pub last_attempt: Option<DateTime<Utc>>,
    pub is_blocked: bool,
    pub blocked_until: Option<DateTime<Utc>>,
    pub reset_token: Option<ResetToken>,
    pub reset_token_expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, password_digest: Secret<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_digest,
            failed_attempts: 0,
            last_attempt: None,
            is_blocked: false,
            blocked_until: None,
            reset_token: None,
            reset_token_expires: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn unblock(&mut self) {
        self.is_blocked = false;
        self.failed_attempts = 0;
        self.blocked_until = None;
    }

    pub fn record_successful_login(&mut self, now: DateTime<Utc>) {
        self.failed_attempts = 0;
        self.last_attempt = Some(now);
        self.updated_at = now;
    }

    pub fn set_password_digest(&mut self, digest: Secret<String>, now: DateTime<Utc>) {
        self.password_digest = digest;
        self.updated_at = now;
    }

    pub fn change_email(&mut self, email: Email, now: DateTime<Utc>) {
        self.email = email;
        self.updated_at = now;
    }

    pub fn issue_reset_token(
        &mut self,
        token: ResetToken,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) {
        self.reset_token = Some(token);
        self.reset_token_expires = Some(expires_at);
        self.updated_at = now;
    }

    pub fn clear_reset_token(&mut self) {
        self.reset_token = None;
        self.reset_token_expires = None;
    }
}
