use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password as received from the client.
///
/// The only structural rule is that it must not be empty; strength policy is
/// left to the caller.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, UserError> {
        if raw.expose_secret().is_empty() {
            return Err(UserError::InvalidPassword);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Password {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(Secret::new(value.to_owned()))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
