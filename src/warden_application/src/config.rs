use chrono::TimeDelta;
use warden_core::ThrottlePolicy;

/// Topic names the orchestrator publishes account events to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTopics {
    pub account_created: String,
    pub account_blocked: String,
    pub password_reset: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetPolicy {
    pub token_ttl: TimeDelta,
}

#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub throttle: ThrottlePolicy,
    pub reset: ResetPolicy,
    pub topics: EventTopics,
}
