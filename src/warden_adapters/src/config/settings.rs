use ::config::{Config, Environment, Source};
use axum::http::HeaderValue;
use chrono::TimeDelta;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;
use warden_application::{EventTopics, IdentityConfig, ResetPolicy};
use warden_core::{ThrottlePolicy, TokenConfig};

use super::constants::{defaults, env, prod};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("failed to read configuration: {0}")]
    Source(#[from] ::config::ConfigError),
}

/// CORS origins the service answers credentialed requests for.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    /// Parses a comma separated list, ignoring blanks.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    name: env::AUTH_SERVICE_ALLOWED_ORIGINS_ENV_VAR,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PostgresSetting {
    pub url: Option<Secret<String>>,
}

#[derive(Debug, Clone)]
pub struct RedisSetting {
    pub host_name: String,
}

#[derive(Debug, Clone)]
pub struct EventSetting {
    pub webhook_url: Option<String>,
}

/// Everything the service needs at start-up, validated once.
#[derive(Debug, Clone)]
pub struct AuthServiceSetting {
    pub token: TokenConfig,
    pub identity: IdentityConfig,
    pub postgres: PostgresSetting,
    pub redis: RedisSetting,
    pub events: EventSetting,
    pub allowed_origins: AllowedOrigins,
    pub app_address: String,
}

// Environment::default() lowercases variable names into these keys.
#[derive(Debug, Deserialize)]
struct RawSettings {
    jwt_secret: Option<Secret<String>>,
    access_token_duration_minutes: Option<i64>,
    refresh_token_duration_days: Option<i64>,
    blocking_time_exponentiation_basis: Option<i64>,
    max_login_attempts_before_block: Option<i64>,
    min_time_between_attempts_in_seconds: Option<i64>,
    expiration_time_reset_token_in_hours: Option<i64>,
    account_created_topic: Option<String>,
    account_blocked_topic: Option<String>,
    password_reset_topic: Option<String>,
    auth_service_allowed_origins: Option<String>,
    database_url: Option<Secret<String>>,
    redis_host_name: Option<String>,
    event_webhook_url: Option<String>,
    app_address: Option<String>,
}

impl AuthServiceSetting {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(Environment::default().try_parsing(true))
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let raw: RawSettings = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Self::validate(raw)
    }

    fn validate(raw: RawSettings) -> Result<Self, ConfigError> {
        let jwt_secret = raw
            .jwt_secret
            .filter(|secret| !secret.expose_secret().is_empty())
            .ok_or(ConfigError::Missing(env::JWT_SECRET_ENV_VAR))?;

        let access_minutes = positive(
            env::ACCESS_TOKEN_DURATION_MINUTES_ENV_VAR,
            raw.access_token_duration_minutes
                .unwrap_or(defaults::ACCESS_TOKEN_DURATION_MINUTES),
        )?;
        let refresh_days = positive(
            env::REFRESH_TOKEN_DURATION_DAYS_ENV_VAR,
            raw.refresh_token_duration_days
                .unwrap_or(defaults::REFRESH_TOKEN_DURATION_DAYS),
        )?;
        let block_minutes = positive(
            env::BLOCKING_TIME_EXPONENTIATION_BASIS_ENV_VAR,
            required(
                env::BLOCKING_TIME_EXPONENTIATION_BASIS_ENV_VAR,
                raw.blocking_time_exponentiation_basis,
            )?,
        )?;
        let max_attempts = positive(
            env::MAX_LOGIN_ATTEMPTS_BEFORE_BLOCK_ENV_VAR,
            required(
                env::MAX_LOGIN_ATTEMPTS_BEFORE_BLOCK_ENV_VAR,
                raw.max_login_attempts_before_block,
            )?,
        )?;
        let min_seconds = raw
            .min_time_between_attempts_in_seconds
            .unwrap_or(defaults::MIN_TIME_BETWEEN_ATTEMPTS_IN_SECONDS);
        if min_seconds < 0 {
            return Err(invalid(
                env::MIN_TIME_BETWEEN_ATTEMPTS_IN_SECONDS_ENV_VAR,
                "must not be negative",
            ));
        }
        let reset_hours = positive(
            env::EXPIRATION_TIME_RESET_TOKEN_IN_HOURS_ENV_VAR,
            raw.expiration_time_reset_token_in_hours
                .unwrap_or(defaults::EXPIRATION_TIME_RESET_TOKEN_IN_HOURS),
        )?;

        let token = TokenConfig {
            jwt_secret,
            access_token_ttl: duration(
                env::ACCESS_TOKEN_DURATION_MINUTES_ENV_VAR,
                TimeDelta::try_minutes(access_minutes),
            )?,
            refresh_token_ttl: duration(
                env::REFRESH_TOKEN_DURATION_DAYS_ENV_VAR,
                TimeDelta::try_days(refresh_days),
            )?,
        };

        let max_attempts = u32::try_from(max_attempts)
            .map_err(|e| invalid(env::MAX_LOGIN_ATTEMPTS_BEFORE_BLOCK_ENV_VAR, e))?;
        let throttle = ThrottlePolicy::new(
            max_attempts,
            duration(
                env::BLOCKING_TIME_EXPONENTIATION_BASIS_ENV_VAR,
                TimeDelta::try_minutes(block_minutes),
            )?,
            duration(
                env::MIN_TIME_BETWEEN_ATTEMPTS_IN_SECONDS_ENV_VAR,
                TimeDelta::try_seconds(min_seconds),
            )?,
        )
        .map_err(|e| invalid(env::MAX_LOGIN_ATTEMPTS_BEFORE_BLOCK_ENV_VAR, e))?;

        let identity = IdentityConfig {
            throttle,
            reset: ResetPolicy {
                token_ttl: duration(
                    env::EXPIRATION_TIME_RESET_TOKEN_IN_HOURS_ENV_VAR,
                    TimeDelta::try_hours(reset_hours),
                )?,
            },
            topics: EventTopics {
                account_created: topic(env::ACCOUNT_CREATED_TOPIC_ENV_VAR, raw.account_created_topic)?,
                account_blocked: topic(env::ACCOUNT_BLOCKED_TOPIC_ENV_VAR, raw.account_blocked_topic)?,
                password_reset: topic(env::PASSWORD_RESET_TOPIC_ENV_VAR, raw.password_reset_topic)?,
            },
        };

        let allowed_origins = match raw.auth_service_allowed_origins {
            Some(raw) => AllowedOrigins::parse(&raw)?,
            None => AllowedOrigins::default(),
        };

        Ok(Self {
            token,
            identity,
            postgres: PostgresSetting {
                url: raw.database_url,
            },
            redis: RedisSetting {
                host_name: raw
                    .redis_host_name
                    .unwrap_or_else(|| defaults::REDIS_HOST_NAME.to_owned()),
            },
            events: EventSetting {
                webhook_url: raw.event_webhook_url,
            },
            allowed_origins,
            app_address: raw
                .app_address
                .unwrap_or_else(|| prod::APP_ADDRESS.to_owned()),
        })
    }

    pub fn database_url(&self) -> Result<&Secret<String>, ConfigError> {
        self.postgres
            .url
            .as_ref()
            .ok_or(ConfigError::Missing(env::DATABASE_URL_ENV_VAR))
    }

    pub fn event_webhook_url(&self) -> Result<&str, ConfigError> {
        self.events
            .webhook_url
            .as_deref()
            .ok_or(ConfigError::Missing(env::EVENT_WEBHOOK_URL_ENV_VAR))
    }
}

fn required(name: &'static str, value: Option<i64>) -> Result<i64, ConfigError> {
    value.ok_or(ConfigError::Missing(name))
}

fn positive(name: &'static str, value: i64) -> Result<i64, ConfigError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(invalid(name, "must be greater than zero"))
    }
}

fn duration(name: &'static str, value: Option<TimeDelta>) -> Result<TimeDelta, ConfigError> {
    value.ok_or_else(|| invalid(name, "out of range"))
}

fn topic(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|topic| !topic.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn invalid(name: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        reason: reason.to_string(),
    }
}
