use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{MessageResponse, SharedIdentityService, error::AuthApiError};
use crate::{config::REFRESH_TOKEN_COOKIE_NAME, http::cookies::access_cookie};

#[tracing::instrument(name = "Refresh", skip_all)]
pub async fn refresh<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let refresh_token = jar
        .get(REFRESH_TOKEN_COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
        .ok_or(AuthApiError::MissingToken)?;

    let refreshed = service.refresh(&refresh_token).await?;

    let jar = jar.add(access_cookie(
        &refreshed.access_token,
        refreshed.access_expires_at,
    ));

    Ok((jar, Json(MessageResponse::new("Token refreshed"))))
}
