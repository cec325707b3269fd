use axum_extra::extract::CookieJar;
use warden_application::AuthError;
use warden_core::{AccessClaims, BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{SharedIdentityService, error::AuthApiError};
use crate::{
    config::{ACCESS_TOKEN_COOKIE_NAME, REFRESH_TOKEN_COOKIE_NAME},
    http::cookies::access_cookie,
};

/// Resolves the session owner from the cookies.
///
/// A live access cookie is used as is. Otherwise a new access token is
/// minted from the refresh cookie and added to the returned jar.
pub(crate) async fn cookie_session<U, H, B, P>(
    service: &SharedIdentityService<U, H, B, P>,
    jar: CookieJar,
) -> Result<(CookieJar, AccessClaims), AuthApiError>
where
    U: UserStore,
    H: PasswordHasher,
    B: BlockList,
    P: EventPublisher,
{
    if let Some(access) = jar.get(ACCESS_TOKEN_COOKIE_NAME) {
        match service.authenticate(access.value()).await {
            Ok(claims) => return Ok((jar, claims)),
            Err(AuthError::InvalidToken | AuthError::TokenRevoked | AuthError::TokenExpired) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let refresh_token = jar
        .get(REFRESH_TOKEN_COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
        .ok_or(AuthApiError::MissingToken)?;

    let refreshed = service.refresh(&refresh_token).await?;
    let claims = service.authenticate(&refreshed.access_token).await?;
    tracing::debug!(sub = %claims.sub, "Access token renewed from refresh cookie");

    let jar = jar.add(access_cookie(
        &refreshed.access_token,
        refreshed.access_expires_at,
    ));
    Ok((jar, claims))
}
