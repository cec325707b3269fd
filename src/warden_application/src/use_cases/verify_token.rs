use warden_core::{AccessClaims, BlockList, TokenEngine};

use crate::error::AuthError;

pub struct VerifyTokenUseCase<'a, B>
where
    B: BlockList,
{
    tokens: &'a TokenEngine<B>,
}

impl<'a, B> VerifyTokenUseCase<'a, B>
where
    B: BlockList,
{
    pub fn new(tokens: &'a TokenEngine<B>) -> Self {
        Self { tokens }
    }

    /// Returns the claims of a live, unrevoked access token.
    #[tracing::instrument(name = "VerifyTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, access_token: &str) -> Result<AccessClaims, AuthError> {
        Ok(self.tokens.authenticate(access_token).await?)
    }

    pub async fn is_valid(&self, access_token: &str) -> Result<bool, AuthError> {
        Ok(self.tokens.is_valid(access_token).await?)
    }
}
