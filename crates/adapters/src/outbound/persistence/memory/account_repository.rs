//! In-memory implementation for account repository.

use application::error::{PersistenceError, Result};
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use domain::identity::account::Account;
use domain::identity::email::EmailAddress;
use tokio::sync::RwLock;

/// Process-local account store.
///
/// The duplicate check and the insertion share one write lock, so racing
/// `save` calls on the same email cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty [`InMemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `accounts`.
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email() == email).cloned())
    }

    async fn save(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;

        if accounts.iter().any(|a| a.id() == account.id()) {
            return Err(PersistenceError::Conflict { field: "id" }.into());
        }
        if accounts.iter().any(|a| a.email() == account.email()) {
            return Err(PersistenceError::Conflict { field: "email" }.into());
        }

        accounts.push(account.clone());
        tracing::trace!(count = accounts.len(), "account stored in memory");

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }
}
