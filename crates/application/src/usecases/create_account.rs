//! Account creation use case implementation.

use std::sync::Arc;

use async_trait::async_trait;
use domain::auth::password::Password;
use domain::identity::account::Account;

use crate::dto::CreateAccountRequestDto;
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::CreateAccount;
use crate::ports::outbound::{AccountRepository, IdGenerator, PasswordService};

/// Account creation use case service.
///
/// Checks run in a fixed order: confirmation, strength, then email
/// uniqueness. The repository is only written once all of them pass.
pub struct CreateAccountUseCase {
    password_service: Arc<dyn PasswordService>,
    account_repo: Arc<dyn AccountRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl CreateAccountUseCase {
    pub fn new(
        password_service: Arc<dyn PasswordService>,
        account_repo: Arc<dyn AccountRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            password_service,
            account_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl CreateAccount for CreateAccountUseCase {
    #[tracing::instrument(skip_all, fields(email = %request.email))]
    async fn execute(
        &self,
        request: CreateAccountRequestDto,
    ) -> Result<Account> {
        let CreateAccountRequestDto {
            email,
            password,
            confirm_password,
        } = request;

        if password != confirm_password {
            tracing::debug!(reason = "password_mismatch", "account rejected");
            return Err(ApplicationError::PasswordMismatch);
        }

        if !self.password_service.validate(&password) {
            tracing::debug!(reason = "invalid_password", "account rejected");
            return Err(ApplicationError::InvalidPassword);
        }

        let password_hash =
            self.password_service.hash(&Password::new(password))?;

        if self.account_repo.find_by_email(&email).await?.is_some() {
            tracing::debug!(reason = "email_already_taken", "account rejected");
            return Err(ApplicationError::EmailAlreadyTaken);
        }

        let account = Account::builder()
            .id(self.id_generator.generate())
            .email(email)
            .password(password_hash)
            .build();

        self.account_repo.save(&account).await?;

        tracing::info!(account_id = %account.id(), "account created");

        Ok(account)
    }
}
