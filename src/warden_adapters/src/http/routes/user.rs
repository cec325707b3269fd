use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use warden_application::{AuthError, UserProfile};
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{SharedIdentityService, error::AuthApiError, session::cookie_session};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email.as_ref().expose_secret().clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

fn profile_error(error: AuthError) -> AuthApiError {
    match error {
        AuthError::UserNotFound => AuthApiError::UserNotFound,
        other => other.into(),
    }
}

#[tracing::instrument(name = "Get current user", skip_all)]
pub async fn current_user<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<UserResponse>), AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let (jar, claims) = cookie_session(&service, jar).await?;

    let profile = service
        .current_user(claims.sub)
        .await
        .map_err(profile_error)?;

    Ok((jar, Json(profile.into())))
}

/// Empty strings count as absent, so clients can send the whole form.
#[tracing::instrument(name = "Update user", skip_all)]
pub async fn update_user<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    jar: CookieJar,
    Json(request): Json<UpdateUserRequest>,
) -> Result<(CookieJar, Json<UserResponse>), AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let (jar, claims) = cookie_session(&service, jar).await?;

    let email = request.email.filter(|e| !e.expose_secret().is_empty());
    let password = request.password.filter(|p| !p.expose_secret().is_empty());

    let profile = service
        .update_profile(claims.sub, email, password)
        .await
        .map_err(profile_error)?;

    Ok((jar, Json(profile.into())))
}
