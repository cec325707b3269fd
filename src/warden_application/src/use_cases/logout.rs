use warden_core::{BlockList, TokenEngine};

use crate::error::AuthError;

/// Logout use case - revokes the session behind an access token
pub struct LogoutUseCase<'a, B>
where
    B: BlockList,
{
    tokens: &'a TokenEngine<B>,
}

impl<'a, B> LogoutUseCase<'a, B>
where
    B: BlockList,
{
    pub fn new(tokens: &'a TokenEngine<B>) -> Self {
        Self { tokens }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, access_token: &str) -> Result<(), AuthError> {
        let claims = self.tokens.revoke(access_token).await?;
        tracing::info!(user_id = %claims.sub, "User logged out");
        Ok(())
    }
}
