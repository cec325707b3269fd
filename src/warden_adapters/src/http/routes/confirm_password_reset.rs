use axum::{
    Form, Json,
    extract::{Path, State},
};
use secrecy::Secret;
use serde::Deserialize;
use warden_core::{BlockList, EventPublisher, PasswordHasher, ResetToken, UserStore};

use super::{MessageResponse, SharedIdentityService, error::AuthApiError};

#[derive(Debug, Deserialize)]
pub struct NewPasswordRequest {
    #[serde(rename = "newPassword")]
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Confirm password reset", skip_all)]
pub async fn confirm_password_reset<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    Path(reset_token): Path<String>,
    Form(request): Form<NewPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    service
        .confirm_password_reset(ResetToken::from(reset_token), request.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password has been reset")))
}
