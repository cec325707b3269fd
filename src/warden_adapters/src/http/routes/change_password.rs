use axum::{Form, Json, extract::State, http::HeaderMap};
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{
    MessageResponse, SharedIdentityService, bearer_token,
    confirm_password_reset::NewPasswordRequest, error::AuthApiError,
};

#[tracing::instrument(name = "Change password", skip_all)]
pub async fn change_password<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    headers: HeaderMap,
    Form(request): Form<NewPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let access_token = bearer_token(&headers)?;
    let claims = service.authenticate(access_token).await?;

    service
        .change_password(claims.sub, request.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password changed")))
}
