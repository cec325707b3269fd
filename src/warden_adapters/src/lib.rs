pub mod config;
pub mod events;
pub mod hashing;
pub mod http;
pub mod persistence;

pub use events::{
    recording_event_publisher::RecordingEventPublisher,
    webhook_event_publisher::WebhookEventPublisher,
};
pub use hashing::argon2_password_hasher::Argon2PasswordHasher;
pub use persistence::{
    hashmap_block_list::HashMapBlockList, hashmap_user_store::HashMapUserStore,
    postgres_user_store::PostgresUserStore, redis_block_list::RedisBlockList,
};
