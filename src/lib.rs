//! # Warden - Identity Provider Library
//!
//! This is a facade crate that re-exports all public APIs from the identity service components.
//! Use this crate to get access to registration, login throttling, session tokens and password
//! reset in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! warden = { path = "../warden" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `UserId`, `ResetToken`
//! - **Token engine and throttle**: `TokenEngine`, `ThrottlePolicy`
//! - **Ports**: `UserStore`, `BlockList`, `PasswordHasher`, `EventPublisher`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`, etc. and the `IdentityService` façade
//! - **Adapters**: `PostgresUserStore`, `RedisBlockList`, `WebhookEventPublisher`, etc.
//! - **Service**: `AuthService` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, token engine and throttle policy
pub mod core {
    pub use warden_core::*;
}

// Re-export most commonly used core types at the root level
pub use warden_core::{
    AccessClaims, AccountEvent, Email, LoginGate, Password, RefreshClaims, RefreshedAccess,
    ResetToken, ThrottlePolicy, ThrottleRejection, TokenConfig, TokenEngine, TokenError,
    TokenKind, TokenPair, User, UserError, UserId,
};

// ============================================================================
// Ports
// ============================================================================

/// Capability traits implemented by the adapters
pub mod ports {
    pub use warden_core::{
        BlockList, BlockListError, EventPublisher, EventPublisherError, PasswordHasher,
        PasswordHasherError, UserStore, UserStoreError,
    };
}

// Re-export ports at root level
pub use ports::{
    BlockList, BlockListError, EventPublisher, EventPublisherError, PasswordHasher,
    PasswordHasherError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::*;
}

// Re-export use cases at root level
pub use warden_application::{
    AuthError, ChangePasswordUseCase, ConfirmPasswordResetUseCase, CurrentUserUseCase,
    EventTopics, IdentityConfig, IdentityService, LoginUseCase, LogoutUseCase,
    PasswordResetTicket, RefreshUseCase, RegisterUseCase, RegisteredUser,
    RequestPasswordResetUseCase, ResetPolicy, UpdateProfileUseCase, UserProfile,
    VerifyTokenUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use warden_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use warden_adapters::hashing::*;
    }

    /// Event publishers
    pub mod events {
        pub use warden_adapters::events::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use warden_adapters::{
    Argon2PasswordHasher, HashMapBlockList, HashMapUserStore, PostgresUserStore,
    RecordingEventPublisher, RedisBlockList, WebhookEventPublisher,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use warden_auth_service::{
    AuthService, configure_postgresql, configure_redis, helpers::get_redis_client,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
