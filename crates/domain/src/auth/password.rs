//! Password logic.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

static PASSWORD_HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\$([a-z0-9-]{1,32})(?:\$v=(\d+))?(?:\$([^$]+))?\$([^$]+)\$([^$]+)$",
    )
    .expect("PHC regex is valid")
});

/// Value object of a plaintext password.
///
/// Never persisted. Strength is checked by [`PasswordPolicy`].
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a new [`Password`].
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the password bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Password strength rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    pub min_length: usize,
    /// Maximum password length, in characters.
    pub max_length: usize,
    /// How many of lowercase, uppercase, digit and symbol must appear.
    pub min_character_classes: u8,
}

impl PasswordPolicy {
    /// Maximum password length.
    pub const MAX_LENGTH: usize = 255;
    /// Minimum password length.
    pub const MIN_LENGTH: usize = 8;

    /// Whether `password` satisfies every rule.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        character_classes(password) >= self.min_character_classes
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: Self::MIN_LENGTH,
            max_length: Self::MAX_LENGTH,
            min_character_classes: 2,
        }
    }
}

/// Count distinct character classes used in `password`.
fn character_classes(password: &str) -> u8 {
    let (mut lower, mut upper, mut digit, mut symbol) =
        (false, false, false, false);

    for c in password.chars() {
        if c.is_lowercase() {
            lower = true;
        } else if c.is_uppercase() {
            upper = true;
        } else if c.is_numeric() {
            digit = true;
        } else {
            symbol = true;
        }
    }

    [lower, upper, digit, symbol]
        .into_iter()
        .filter(|present| *present)
        .count() as u8
}

/// A hashed password stored in the database.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps a hash produced by a password service.
    ///
    /// Never fails. Caller must ensure the value is a one-way hash.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Converts a [`String`] into a valid [`PasswordHash`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not in PHC format.
    pub fn parse(phc_string: impl Into<String>) -> Result<Self> {
        let pwd = phc_string.into();
        if !PASSWORD_HASH_RE.is_match(&pwd) {
            return Err(DomainError::InvalidPasswordHash);
        }

        Ok(Self(pwd))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("phc_string", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PasswordPolicy::default();

        assert!(policy.is_satisfied_by("P$soW%920$n&"));
        assert!(policy.is_satisfied_by("password1"));
        // Single character class.
        assert!(!policy.is_satisfied_by("password"));
        // Too short.
        assert!(!policy.is_satisfied_by("Pa1$"));
        // Too long.
        assert!(!policy.is_satisfied_by(&"aA1".repeat(100)));
    }

    #[test]
    fn test_length_counts_characters() {
        let policy = PasswordPolicy {
            min_length: 4,
            max_length: 4,
            min_character_classes: 1,
        };

        assert!(policy.is_satisfied_by("éééé"));
        assert!(!policy.is_satisfied_by("ééééé"));
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(character_classes(""), 0);
        assert_eq!(character_classes("abc"), 1);
        assert_eq!(character_classes("abC"), 2);
        assert_eq!(character_classes("abC1"), 3);
        assert_eq!(character_classes("abC1 "), 4);
    }

    #[test]
    fn test_password_hash_parse() {
        assert!(
            PasswordHash::parse(
                "$argon2id$v=19$m=65536,t=4,p=2$c29tZXNhbHQ$aGFzaGVkcGFzc3dvcmQ"
            )
            .is_ok()
        );
        assert_eq!(
            PasswordHash::parse("hashed-password"),
            Err(DomainError::InvalidPasswordHash)
        );
    }

    #[test]
    fn test_secrets_are_redacted() {
        let password = Password::new("hunter22");
        let hash = PasswordHash::new("hashed-password");

        assert!(!format!("{password:?}").contains("hunter22"));
        assert!(!format!("{hash:?}").contains("hashed-password"));
    }
}
