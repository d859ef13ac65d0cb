//! Account creation use case port.

use async_trait::async_trait;
use domain::identity::account::Account;

use crate::dto::CreateAccountRequestDto;
use crate::error::Result;

/// Inbound port for account creation.
#[async_trait]
pub trait CreateAccount: Send + Sync {
    /// Create a new account.
    async fn execute(&self, request: CreateAccountRequestDto)
    -> Result<Account>;
}
