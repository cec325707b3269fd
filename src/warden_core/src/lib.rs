pub mod domain;
pub mod ports;
pub mod throttle;
pub mod token;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::Password,
    reset_token::ResetToken,
    user::{User, UserError},
    user_id::UserId,
};

pub use ports::{
    repositories::{BlockList, BlockListError, UserStore, UserStoreError},
    services::{AccountEvent, EventPublisher, EventPublisherError, PasswordHasher, PasswordHasherError},
};

pub use throttle::{InvalidThrottlePolicy, LoginGate, ThrottlePolicy, ThrottleRejection};

pub use token::{
    claims::{AccessClaims, RefreshClaims, TokenKind},
    engine::{RefreshedAccess, TokenConfig, TokenEngine, TokenError, TokenPair},
};
