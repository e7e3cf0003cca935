//! Email Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, normalized email address. Stored trimmed and lowercased so
/// uniqueness comparisons are case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let value = value.into().trim().to_lowercase();

        if value.is_empty() {
            return Err(EmailError::Empty);
        }

        let (local, domain) = value.split_once('@').ok_or(EmailError::InvalidFormat)?;
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part, after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or_default()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("invalid email format")]
    InvalidFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("smith@clinic.com").unwrap();
        assert_eq!(email.as_str(), "smith@clinic.com");
        assert_eq!(email.domain(), "clinic.com");
    }

    #[test]
    fn test_email_normalized() {
        let email = Email::new("  Smith@Clinic.COM ").unwrap();
        assert_eq!(email.as_str(), "smith@clinic.com");
    }

    #[test]
    fn test_empty_email() {
        assert!(matches!(Email::new("   "), Err(EmailError::Empty)));
    }

    #[test]
    fn test_invalid_emails() {
        for bad in ["smith", "smith@", "@clinic.com", "smith@clinic", "smith@.com"] {
            assert!(
                matches!(Email::new(bad), Err(EmailError::InvalidFormat)),
                "{bad} should be rejected"
            );
        }
    }
}
