use redis::{Client, RedisResult};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;
use warden_adapters::config::{AuthServiceSetting, ConfigError};

#[derive(Debug, Error)]
pub enum InfraError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Configure a PostgreSQL connection pool and run all pending migrations
pub async fn configure_postgresql(config: &AuthServiceSetting) -> Result<PgPool, InfraError> {
    let db_url = config.database_url()?.expose_secret();
    let pg_pool = get_postgres_pool(db_url).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Configure and return a Redis connection
pub fn configure_redis(config: &AuthServiceSetting) -> Result<redis::Connection, InfraError> {
    Ok(get_redis_client(&config.redis.host_name)?.get_connection()?)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

/// Create a Redis client
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
