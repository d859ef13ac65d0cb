//! Interfaces for cryptographic operations.

use domain::auth::password::{Password, PasswordHash};

use crate::error::Result;

/// Port for password policy and hashing.
pub trait PasswordService: Send + Sync {
    /// Whether `password` meets strength requirements.
    fn validate(&self, password: &str) -> bool;

    /// Hash a password using a one-way algorithm.
    fn hash(&self, password: &Password) -> Result<PasswordHash>;
}
