//! Identifier generation port.

use domain::identity::id::AccountId;

/// Port for generating new account identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier never returned before.
    fn generate(&self) -> AccountId;
}
