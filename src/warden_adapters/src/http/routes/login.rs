use axum::{Form, Json, extract::State};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{MessageResponse, SharedIdentityService, error::AuthApiError};
use crate::http::cookies::{access_cookie, refresh_cookie};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    jar: CookieJar,
    Form(request): Form<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let pair = service.login(request.email, request.password).await?;

    let jar = jar
        .add(access_cookie(&pair.access_token, pair.access_expires_at))
        .add(refresh_cookie(&pair.refresh_token, pair.refresh_expires_at));

    Ok((jar, Json(MessageResponse::new("Logged in"))))
}
