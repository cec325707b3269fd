use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use warden_core::{Password, PasswordHasher, PasswordHasherError};

/// Argon2id hashing, run on the blocking pool so request tasks are not
/// stalled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::new(h.to_string()))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        digest: &Secret<String>,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        let digest = digest.clone();
        let candidate = candidate.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash: PasswordHash<'_> =
                    PasswordHash::new(digest.expose_secret())
                        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

                argon2()?
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected_password_hash,
                    )
                    .map_err(|e| match e {
                        password_hash::Error::Password => PasswordHasherError::Mismatch,
                        other => PasswordHasherError::UnexpectedError(other.to_string()),
                    })
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}

fn argon2() -> Result<Argon2<'static>, PasswordHasherError> {
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
