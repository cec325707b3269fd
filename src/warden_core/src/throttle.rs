//! Brute-force mitigation for password logins.
//!
//! Failed attempts are counted per account. Once the count reaches
//! `max_attempts_before_block` the account is blocked for
//! `base_block_duration * 2^(failed - max)`. A block lapses on its own: the
//! first attempt strictly after `blocked_until` clears it before the password
//! is checked.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::domain::user::User;

/// Upper bound on the backoff exponent so the block window stays representable.
pub const MAX_BACKOFF_EXPONENT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidThrottlePolicy {
    #[error("max attempts before block must be greater than zero")]
    ZeroMaxAttempts,
    #[error("base block duration must be positive")]
    NonPositiveBaseDuration,
    #[error("minimum time between attempts must not be negative")]
    NegativeMinInterval,
}

/// Outcome of the pre-credential checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginGate {
    Open,
    /// The account was blocked and the window has passed. The caller must
    /// unblock and persist before checking the password.
    BlockLapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleRejection {
    AccountBlocked { until: DateTime<Utc> },
    TooManyAttempts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    max_attempts_before_block: u32,
    base_block_duration: TimeDelta,
    min_time_between_attempts: TimeDelta,
}

impl ThrottlePolicy {
    pub fn new(
        max_attempts_before_block: u32,
        base_block_duration: TimeDelta,
        min_time_between_attempts: TimeDelta,
    ) -> Result<Self, InvalidThrottlePolicy> {
        if max_attempts_before_block == 0 {
            return Err(InvalidThrottlePolicy::ZeroMaxAttempts);
        }
        if base_block_duration <= TimeDelta::zero() {
            return Err(InvalidThrottlePolicy::NonPositiveBaseDuration);
        }
        if min_time_between_attempts < TimeDelta::zero() {
            return Err(InvalidThrottlePolicy::NegativeMinInterval);
        }
        Ok(Self {
            max_attempts_before_block,
            base_block_duration,
            min_time_between_attempts,
        })
    }

    pub fn max_attempts_before_block(&self) -> u32 {
        self.max_attempts_before_block
    }

    pub fn base_block_duration(&self) -> TimeDelta {
        self.base_block_duration
    }

    pub fn min_time_between_attempts(&self) -> TimeDelta {
        self.min_time_between_attempts
    }

    /// Checks run before the credential is looked at. Never mutates.
    pub fn gate(&self, user: &User, now: DateTime<Utc>) -> Result<LoginGate, ThrottleRejection> {
        if let (true, Some(until)) = (user.is_blocked, user.blocked_until) {
            if now < until {
                return Err(ThrottleRejection::AccountBlocked { until });
            }
        }

        let debounced = user
            .last_attempt
            .is_some_and(|last| now.signed_duration_since(last) < self.min_time_between_attempts);
        if debounced {
            return Err(ThrottleRejection::TooManyAttempts);
        }

        let lapsed = match user.blocked_until {
            None => true,
            Some(until) => now > until,
        };
        if user.is_blocked && lapsed {
            return Ok(LoginGate::BlockLapsed);
        }

        Ok(LoginGate::Open)
    }

    /// Block window for an account that has reached `failed_attempts`.
    pub fn block_duration(&self, failed_attempts: u32) -> TimeDelta {
        let exponent = failed_attempts
            .saturating_sub(self.max_attempts_before_block)
            .min(MAX_BACKOFF_EXPONENT);
        self.base_block_duration
            .checked_mul(1_i32 << exponent)
            .unwrap_or(TimeDelta::MAX)
    }

    /// Counts a mismatched password. Returns the new `blocked_until` when the
    /// failure tips the account into a block.
    pub fn record_failure(&self, user: &mut User, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        user.failed_attempts = user.failed_attempts.saturating_add(1);
        user.last_attempt = Some(now);
        user.updated_at = now;

        if user.failed_attempts < self.max_attempts_before_block {
            return None;
        }

        let until = now
            .checked_add_signed(self.block_duration(user.failed_attempts))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        user.is_blocked = true;
        user.blocked_until = Some(until);
        Some(until)
    }
}
