use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // One '@' with a non-empty, whitespace-free local part and domain.
    Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap_or_else(|_| unreachable!("email pattern is a valid regex"))
});

/// A syntactically valid email address.
///
/// Stored as a secret so it never ends up in logs by accident.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(raw: Secret<String>) -> Result<Self, UserError> {
        if EMAIL_PATTERN.is_match(raw.expose_secret()) {
            Ok(Self(raw))
        } else {
            Err(UserError::InvalidEmail)
        }
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(Secret::new(value.to_owned()))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
