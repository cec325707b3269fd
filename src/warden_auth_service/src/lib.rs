pub mod auth_service;
pub mod helpers;
pub mod tracing;

pub use auth_service::AuthService;
pub use helpers::{InfraError, configure_postgresql, configure_redis};
