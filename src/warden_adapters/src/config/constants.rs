pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const ACCESS_TOKEN_DURATION_MINUTES_ENV_VAR: &str = "ACCESS_TOKEN_DURATION_MINUTES";
    pub const REFRESH_TOKEN_DURATION_DAYS_ENV_VAR: &str = "REFRESH_TOKEN_DURATION_DAYS";
    pub const BLOCKING_TIME_EXPONENTIATION_BASIS_ENV_VAR: &str =
        "BLOCKING_TIME_EXPONENTIATION_BASIS";
    pub const MAX_LOGIN_ATTEMPTS_BEFORE_BLOCK_ENV_VAR: &str = "MAX_LOGIN_ATTEMPTS_BEFORE_BLOCK";
    pub const MIN_TIME_BETWEEN_ATTEMPTS_IN_SECONDS_ENV_VAR: &str =
        "MIN_TIME_BETWEEN_ATTEMPTS_IN_SECONDS";
    pub const EXPIRATION_TIME_RESET_TOKEN_IN_HOURS_ENV_VAR: &str =
        "EXPIRATION_TIME_RESET_TOKEN_IN_HOURS";
    pub const ACCOUNT_CREATED_TOPIC_ENV_VAR: &str = "ACCOUNT_CREATED_TOPIC";
    pub const ACCOUNT_BLOCKED_TOPIC_ENV_VAR: &str = "ACCOUNT_BLOCKED_TOPIC";
    pub const PASSWORD_RESET_TOPIC_ENV_VAR: &str = "PASSWORD_RESET_TOPIC";
    pub const AUTH_SERVICE_ALLOWED_ORIGINS_ENV_VAR: &str = "AUTH_SERVICE_ALLOWED_ORIGINS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const EVENT_WEBHOOK_URL_ENV_VAR: &str = "EVENT_WEBHOOK_URL";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
}

pub const ACCESS_TOKEN_COOKIE_NAME: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE_NAME: &str = "refresh_token";

pub mod defaults {
    pub const ACCESS_TOKEN_DURATION_MINUTES: i64 = 15;
    pub const REFRESH_TOKEN_DURATION_DAYS: i64 = 4;
    pub const MIN_TIME_BETWEEN_ATTEMPTS_IN_SECONDS: i64 = 0;
    pub const EXPIRATION_TIME_RESET_TOKEN_IN_HOURS: i64 = 24;
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod event_publisher {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod event_publisher {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
