//! Accounts creates user accounts: confirmation, strength policy, hashing,
//! email uniqueness and storage.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

use adapters::outbound::crypto::Argon2PasswordService;
use adapters::outbound::id::UuidGenerator;
use adapters::outbound::persistence::memory::InMemoryAccountRepository;
use adapters::outbound::persistence::postgres::PgAccountRepository;
use application::dto::CreateAccountRequestDto;
use application::error::ApplicationError;
use application::ports::inbound::CreateAccount;
use application::ports::outbound::AccountRepository;
use application::usecases::CreateAccountUseCase;
use domain::identity::account::Account;
use domain::identity::email::EmailAddress;

use crate::config::Configuration;
use crate::error::Result;

/// Wired services, shared by every command.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
    pub accounts: Arc<dyn AccountRepository>,
    pub create_account: Arc<dyn CreateAccount>,
}

impl AppState {
    /// Normalize `email` with the configured policy, then run the account
    /// creation workflow.
    pub async fn create(
        &self,
        email: &str,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Result<Account> {
        let request = CreateAccountRequestDto {
            email: EmailAddress::parse_with(email, &self.config.email)
                .map_err(ApplicationError::from)?,
            password: password.into(),
            confirm_password: confirm_password.into(),
        };

        Ok(self.create_account.execute(request).await?)
    }
}

/// Build every adapter from `config`.
///
/// PostgreSQL is used when configured, after running pending migrations.
/// Otherwise accounts only live as long as the process.
pub async fn initialize_state(config: Configuration) -> Result<AppState> {
    let accounts: Arc<dyn AccountRepository> = match config.postgres {
        Some(ref postgres) => {
            let repo = PgAccountRepository::connect(
                &postgres.url(),
                postgres.pool_size(),
            )
            .await?;

            // execute migrations scripts on start.
            repo.migrate().await?;
            tracing::info!(address = %postgres.address, "postgres connected");

            Arc::new(repo)
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on configuration, accounts are kept \
                 in memory"
            );
            Arc::new(InMemoryAccountRepository::new())
        },
    };

    with_repository(config, accounts)
}

/// Build the services around an already opened repository.
pub fn with_repository(
    config: Configuration,
    accounts: Arc<dyn AccountRepository>,
) -> Result<AppState> {
    let password_service = Argon2PasswordService::new(
        config.argon2.memory_cost,
        config.argon2.iterations,
        config.argon2.parallelism,
        config.argon2.hash_length,
    )?
    .with_policy(config.password);

    let create_account = CreateAccountUseCase::new(
        Arc::new(password_service),
        Arc::clone(&accounts),
        Arc::new(UuidGenerator::new(config.id.version)),
    );

    Ok(AppState {
        config: Arc::new(config),
        accounts,
        create_account: Arc::new(create_account),
    })
}
