use axum::{Form, Json, extract::State};
use secrecy::Secret;
use serde::Deserialize;
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{MessageResponse, SharedIdentityService, error::AuthApiError};

#[derive(Debug, Deserialize)]
pub struct RequestPasswordResetRequest {
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Request password reset", skip_all)]
pub async fn request_password_reset<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    Form(request): Form<RequestPasswordResetRequest>,
) -> Result<Json<MessageResponse>, AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    // The token itself only travels through the event bus.
    service.request_password_reset(request.email).await?;

    Ok(Json(MessageResponse::new(
        "Password reset instructions have been sent",
    )))
}
