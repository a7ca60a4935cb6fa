//! User Name Value Object
//!
//! Public handle used for login and display.
//!
//! Input is NFKC-normalized and trimmed. Case is preserved for display;
//! uniqueness and login compare the lowercase form.
//!
//! ## Invariants
//! - 3 to 30 characters after normalization
//! - ASCII letters, digits and `_ . - +` only
//! - Starts and ends with a letter, digit or `_`
//! - No consecutive dots

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

pub const USER_NAME_MIN_LENGTH: usize = 3;

pub const USER_NAME_MAX_LENGTH: usize = 30;

const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("User name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error(
        "Invalid character '{char}' at position {position}. Only letters, digits, _, ., -, + are allowed"
    )]
    InvalidCharacter { char: char, position: usize },

    #[error("User name must start and end with a letter, digit, or _")]
    InvalidBoundary,

    #[error("User name cannot contain consecutive dots (..)")]
    ConsecutiveDots,
}

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = input.as_ref().nfkc().collect::<String>().trim().to_string();
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    fn validate(name: &str) -> Result<(), UserNameError> {
        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some((position, char)) = name
            .chars()
            .enumerate()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(c)))
        {
            return Err(UserNameError::InvalidCharacter { char, position });
        }

        let boundary_ok = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        if !boundary_ok(name.chars().next()) || !boundary_ok(name.chars().next_back()) {
            return Err(UserNameError::InvalidBoundary);
        }

        if name.contains("..") {
            return Err(UserNameError::ConsecutiveDots);
        }

        Ok(())
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Display form, case preserved
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form used for uniqueness and lookup
    pub fn canonical(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(s: String) -> Result<Self, UserNameError> {
        UserName::new(s)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_names() {
        for name in ["neo", "Player_One", "tron.fan", "a-b+c", "_hidden_", "user123"] {
            assert!(UserName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_normalization_preserves_case() {
        let name = UserName::new("  ＰｌａｙｅｒOne ").unwrap();
        assert_eq!(name.as_str(), "PlayerOne");
        assert_eq!(name.canonical(), "playerone");
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            UserName::new("ab"),
            Err(UserNameError::TooShort { length: 2, min: 3 })
        );
        assert!(matches!(
            UserName::new("a".repeat(31)),
            Err(UserNameError::TooLong { length: 31, .. })
        ));
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_invalid_characters_and_boundaries() {
        assert!(matches!(
            UserName::new("bad name"),
            Err(UserNameError::InvalidCharacter { char: ' ', position: 3 })
        ));
        assert!(matches!(
            UserName::new("ユーザー"),
            Err(UserNameError::InvalidCharacter { position: 0, .. })
        ));
        assert_eq!(UserName::new(".neo"), Err(UserNameError::InvalidBoundary));
        assert_eq!(UserName::new("neo-"), Err(UserNameError::InvalidBoundary));
        assert_eq!(UserName::new("ne..o"), Err(UserNameError::ConsecutiveDots));
    }
}
