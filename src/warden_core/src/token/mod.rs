pub mod claims;
pub mod engine;
