use axum::{Json, extract::State};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use super::{SharedIdentityService, error::AuthApiError};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    pub email: String,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H, B, P>(
    State(service): State<SharedIdentityService<U, H, B, P>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AuthApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    B: BlockList + 'static,
    P: EventPublisher + 'static,
{
    let registered = service.register(request.email, request.password).await?;

    Ok(Json(RegisterResponse {
        id: registered.id.to_string(),
        email: registered.email.as_ref().expose_secret().clone(),
    }))
}
