use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

use super::claims::{AccessClaims, RefreshClaims, TokenKind};
use crate::domain::user_id::UserId;
use crate::ports::repositories::{BlockList, BlockListError};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token has been revoked")]
    TokenRevoked,
    #[error("Failed to sign token: {0}")]
    Signing(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
    #[error("Block list error: {0}")]
    BlockList(#[from] BlockListError),
}

/// Signing secret and lifetimes. Immutable once the engine is built.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub jwt_secret: Secret<String>,
    pub access_token_ttl: TimeDelta,
    pub refresh_token_ttl: TimeDelta,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
    pub refresh_uuid: Uuid,
}

/// Result of a refresh: a new access token while the refresh token stays as is.
#[derive(Debug, Clone)]
pub struct RefreshedAccess {
    pub access_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_token: String,
}

pub struct TokenEngine<B>
where
    B: BlockList,
{
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    block_list: B,
}

impl<B> TokenEngine<B>
where
    B: BlockList,
{
    pub fn new(config: TokenConfig, block_list: B) -> Self {
        let secret = config.jwt_secret.expose_secret().as_bytes();
        let encoding_key = EncodingKey::from_secret(secret);
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            block_list,
        }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn block_list(&self) -> &B {
        &self.block_list
    }

    pub fn mint_pair(&self, user_id: UserId) -> Result<TokenPair, TokenError> {
        self.mint_pair_at(user_id, Utc::now())
    }

    pub fn mint_pair_at(&self, user_id: UserId, now: DateTime<Utc>) -> Result<TokenPair, TokenError> {
        let refresh_uuid = Uuid::new_v4();
        let refresh_expires_at = expiry(now, self.config.refresh_token_ttl)?;
        let refresh_claims = RefreshClaims {
            sub: user_id,
            refresh_uuid,
            token_type: TokenKind::Refresh,
            exp: refresh_expires_at.timestamp(),
        };
        let refresh_token = self.sign(&refresh_claims)?;

        let (access_token, access_expires_at) =
            self.mint_access(user_id, refresh_uuid, refresh_claims.exp, now)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
            refresh_uuid,
        })
    }

    fn mint_access(
        &self,
        user_id: UserId,
        refresh_uuid: Uuid,
        refresh_exp: i64,
        now: DateTime<Utc>,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        let access_expires_at = expiry(now, self.config.access_token_ttl)?;
        let claims = AccessClaims {
            sub: user_id,
            access_uuid: Uuid::new_v4(),
            refresh_uuid,
            refresh_exp,
            token_type: TokenKind::Access,
            exp: access_expires_at.timestamp(),
        };
        Ok((self.sign(&claims)?, access_expires_at))
    }

    pub fn parse_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let claims: AccessClaims = self.verify(token)?;
        if claims.token_type != TokenKind::Access {
            return Err(TokenError::InvalidToken);
        }
        Ok(claims)
    }

    pub fn parse_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        let claims: RefreshClaims = self.verify(token)?;
        if claims.token_type != TokenKind::Refresh {
            return Err(TokenError::InvalidToken);
        }
        Ok(claims)
    }

    /// Parses an access token and checks it against the block-list.
    #[tracing::instrument(name = "TokenEngine::authenticate", skip_all)]
    pub async fn authenticate(&self, access_token: &str) -> Result<AccessClaims, TokenError> {
        let claims = self.parse_access(access_token)?;
        if self
            .block_list
            .contains(&claims.access_uuid.to_string())
            .await?
        {
            return Err(TokenError::TokenRevoked);
        }
        Ok(claims)
    }

    pub async fn is_valid(&self, access_token: &str) -> Result<bool, TokenError> {
        match self.authenticate(access_token).await {
            Ok(_) => Ok(true),
            Err(TokenError::InvalidToken | TokenError::TokenRevoked) => Ok(false),
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(name = "TokenEngine::refresh", skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedAccess, TokenError> {
        self.refresh_at(refresh_token, Utc::now()).await
    }

    pub async fn refresh_at(
        &self,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> Result<RefreshedAccess, TokenError> {
        let claims = self.parse_refresh(refresh_token)?;
        if self
            .block_list
            .contains(&claims.refresh_uuid.to_string())
            .await?
        {
            tracing::warn!(sub = %claims.sub, "Refresh attempted with a revoked token");
            return Err(TokenError::TokenRevoked);
        }

        let (access_token, access_expires_at) =
            self.mint_access(claims.sub, claims.refresh_uuid, claims.exp, now)?;

        Ok(RefreshedAccess {
            access_token,
            access_expires_at,
            refresh_token: refresh_token.to_owned(),
        })
    }

    /// Block-lists both halves of the session the access token belongs to.
    ///
    /// The access entry is written first; if the refresh entry then fails the
    /// access entry stays in place.
    #[tracing::instrument(name = "TokenEngine::revoke", skip_all)]
    pub async fn revoke(&self, access_token: &str) -> Result<AccessClaims, TokenError> {
        let claims = self.parse_access(access_token)?;
        let now = Utc::now().timestamp();

        self.block_list
            .add(
                &claims.access_uuid.to_string(),
                remaining_ttl(claims.exp, now),
            )
            .await?;

        if let Err(e) = self
            .block_list
            .add(
                &claims.refresh_uuid.to_string(),
                remaining_ttl(claims.refresh_exp, now),
            )
            .await
        {
            tracing::error!(
                error = %e,
                sub = %claims.sub,
                "Access token revoked but refresh token could not be block-listed"
            );
            return Err(e.into());
        }

        Ok(claims)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                TokenError::InvalidToken
            })
    }
}

fn expiry(now: DateTime<Utc>, ttl: TimeDelta) -> Result<DateTime<Utc>, TokenError> {
    now.checked_add_signed(ttl)
        .ok_or_else(|| TokenError::UnexpectedError("token expiry out of range".to_owned()))
}

fn remaining_ttl(exp: i64, now: i64) -> Duration {
    let secs = exp.saturating_sub(now).max(1);
    Duration::from_secs(secs.unsigned_abs())
}
