//! Account repository port.

use async_trait::async_trait;
use domain::identity::account::Account;
use domain::identity::email::EmailAddress;

use crate::error::Result;

/// Port for account persistence operations.
///
/// Implementations own the uniqueness of ids and emails: `save` must refuse
/// a duplicate rather than overwrite it, even when two callers race.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by email. Absence is `Ok(None)`.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>>;

    /// Insert a new account.
    async fn save(&self, account: &Account) -> Result<()>;

    /// Every stored account, in insertion order.
    async fn get_all(&self) -> Result<Vec<Account>>;
}
