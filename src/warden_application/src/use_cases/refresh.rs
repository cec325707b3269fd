use warden_core::{BlockList, RefreshedAccess, TokenEngine};

use crate::error::AuthError;

/// Refresh use case - mints a new access token from a refresh token
pub struct RefreshUseCase<'a, B>
where
    B: BlockList,
{
    tokens: &'a TokenEngine<B>,
}

impl<'a, B> RefreshUseCase<'a, B>
where
    B: BlockList,
{
    pub fn new(tokens: &'a TokenEngine<B>) -> Self {
        Self { tokens }
    }

    #[tracing::instrument(name = "RefreshUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<RefreshedAccess, AuthError> {
        Ok(self.tokens.refresh(refresh_token).await?)
    }
}
