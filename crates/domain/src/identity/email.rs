//! Email logic management.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::{DomainError, Result};

/// Maximum length of a forward-path address (RFC 5321).
const MAX_LENGTH: usize = 254;

/// How letter case is folded before two addresses are compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFolding {
    /// Lowercase the whole address.
    #[default]
    Full,
    /// Lowercase the domain only, local parts stay case-sensitive.
    DomainOnly,
    /// Keep the address as typed.
    Preserve,
}

/// Normalization applied by [`EmailAddress::parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailPolicy {
    /// Strip surrounding whitespaces instead of rejecting them.
    pub trim: bool,
    pub case: CaseFolding,
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self {
            trim: true,
            case: CaseFolding::Full,
        }
    }
}

/// Value object of a valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Converts a string into a valid [`EmailAddress`] using the default
    /// [`EmailPolicy`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a valid email address as
    /// defined by the WHATWG grammar or exceeds 254 characters.
    pub fn parse(email: impl AsRef<str>) -> Result<Self> {
        Self::parse_with(email, &EmailPolicy::default())
    }

    /// Converts a string into a valid [`EmailAddress`], normalized as
    /// `policy` describes.
    ///
    /// # Errors
    ///
    /// Same as [`EmailAddress::parse`].
    pub fn parse_with(
        email: impl AsRef<str>,
        policy: &EmailPolicy,
    ) -> Result<Self> {
        let email = email.as_ref();
        let candidate = if policy.trim { email.trim() } else { email };

        if candidate.len() > MAX_LENGTH || !candidate.validate_email() {
            return Err(DomainError::InvalidEmailFormat);
        }

        // `validate_email` guarantees a single separating '@' at this point.
        let (local, domain) = candidate
            .rsplit_once('@')
            .ok_or(DomainError::InvalidEmailFormat)?;

        let normalized = match policy.case {
            CaseFolding::Full => candidate.to_lowercase(),
            CaseFolding::DomainOnly => {
                format!("{local}@{}", domain.to_lowercase())
            },
            CaseFolding::Preserve => candidate.to_string(),
        };

        Ok(Self(normalized))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(local, _)| local)
    }

    /// Part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
