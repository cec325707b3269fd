use std::sync::Arc;

use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use tokio::sync::RwLock;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warden_adapters::{
    Argon2PasswordHasher, PostgresUserStore, RedisBlockList, WebhookEventPublisher,
    config::{AuthServiceSetting, prod},
};
use warden_application::IdentityService;
use warden_auth_service::{AuthService, configure_postgresql, configure_redis};
use warden_core::TokenEngine;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AuthServiceSetting::load()?;

    // Setup database and Redis
    let pg_pool = configure_postgresql(&config).await?;
    let redis_conn = Arc::new(RwLock::new(configure_redis(&config)?));

    // Create adapters
    let user_store = PostgresUserStore::new(pg_pool);
    let block_list = RedisBlockList::new(redis_conn);

    let http_client = HttpClient::builder()
        .timeout(prod::event_publisher::TIMEOUT)
        .build()?;
    let publisher = WebhookEventPublisher::new(config.event_webhook_url()?.to_owned(), http_client);

    let identity = IdentityService::new(
        user_store,
        Argon2PasswordHasher::new(),
        TokenEngine::new(config.token.clone(), block_list),
        publisher,
        config.identity.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&config.app_address).await?;
    tracing::info!("Starting warden identity service...");

    AuthService::new(identity)
        .run_standalone(listener, Some(config.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
