//! Contact Number Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated phone contact number. Separators (spaces, dashes, dots) are
/// stripped on construction; only the digit string is kept.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, ContactNumberError> {
        let raw = value.into();
        let digits: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        if digits.is_empty() {
            return Err(ContactNumberError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ContactNumberError::InvalidCharacters);
        }
        if digits.len() < 7 || digits.len() > 15 {
            return Err(ContactNumberError::InvalidLength);
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContactNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactNumberError {
    #[error("contact number cannot be empty")]
    Empty,
    #[error("contact number must be 7 to 15 digits")]
    InvalidLength,
    #[error("contact number may only contain digits")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_number() {
        let number = ContactNumber::new("1234567890").unwrap();
        assert_eq!(number.as_str(), "1234567890");
    }

    #[test]
    fn test_separators_stripped() {
        let number = ContactNumber::new("(123) 456-7890").unwrap();
        assert_eq!(number.as_str(), "1234567890");
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            ContactNumber::new("12345"),
            Err(ContactNumberError::InvalidLength)
        ));
    }

    #[test]
    fn test_letters_rejected() {
        assert!(matches!(
            ContactNumber::new("12345abc90"),
            Err(ContactNumberError::InvalidCharacters)
        ));
    }
}
