use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use time::Duration;

use crate::config::{ACCESS_TOKEN_COOKIE_NAME, REFRESH_TOKEN_COOKIE_NAME};

pub fn access_cookie(token: &str, expires_at: DateTime<Utc>) -> Cookie<'static> {
    session_cookie(ACCESS_TOKEN_COOKIE_NAME, token, max_age_until(expires_at))
}

pub fn refresh_cookie(token: &str, expires_at: DateTime<Utc>) -> Cookie<'static> {
    session_cookie(REFRESH_TOKEN_COOKIE_NAME, token, max_age_until(expires_at))
}

/// Expired cookies that make the browser drop the session.
pub fn removal_cookies() -> [Cookie<'static>; 2] {
    [
        session_cookie(ACCESS_TOKEN_COOKIE_NAME, "", Duration::ZERO),
        session_cookie(REFRESH_TOKEN_COOKIE_NAME, "", Duration::ZERO),
    ]
}

fn session_cookie(name: &'static str, value: &str, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value.to_owned()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(max_age)
        .build()
}

fn max_age_until(expires_at: DateTime<Utc>) -> Duration {
    let seconds = expires_at.signed_duration_since(Utc::now()).num_seconds();
    Duration::seconds(seconds.max(0))
}
