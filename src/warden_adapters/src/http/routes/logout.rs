use axum::{Json, extract::State, http::HeaderMap};
use axum_extra::extract::CookieJar;
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{MessageResponse, SharedIdentityService, bearer_token, error::AuthApiError};
use crate::http::cookies::removal_cookies;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let access_token = bearer_token(&headers)?;
    service.logout(access_token).await?;

    let jar = removal_cookies()
        .into_iter()
        .fold(jar, |jar, cookie| jar.add(cookie));

    Ok((jar, Json(MessageResponse::new("Logged out"))))
}
