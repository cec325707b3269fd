use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{MessageResponse, SharedIdentityService, error::AuthApiError, session::cookie_session};

/// Accepts a live access cookie, otherwise tries to mint a new access token
/// from the refresh cookie.
#[tracing::instrument(name = "Is user authenticated", skip_all)]
pub async fn is_user_authenticated<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let (jar, _claims) = cookie_session(&service, jar).await?;

    Ok((jar, Json(MessageResponse::new("User is authenticated"))))
}
