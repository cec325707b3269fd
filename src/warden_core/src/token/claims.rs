use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user_id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims of a short-lived access token. `exp` and `refresh_exp` are unix
/// seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: UserId,
    pub access_uuid: Uuid,
    pub refresh_uuid: Uuid,
    pub refresh_exp: i64,
    pub token_type: TokenKind,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: UserId,
    pub refresh_uuid: Uuid,
    pub token_type: TokenKind,
    pub exp: i64,
}
