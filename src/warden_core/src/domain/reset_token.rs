use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single-use password reset token handed to the account owner out of band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResetToken(String);

impl ResetToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResetToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ResetToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
