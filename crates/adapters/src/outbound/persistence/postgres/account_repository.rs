//! PostgreSQL implementation for account repository.

use application::error::{
    ApplicationError, PersistenceError, Result, ToPersistence,
};
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use domain::identity::account::Account;
use domain::identity::email::EmailAddress;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::AccountRecord;

const EMAIL_CONSTRAINT: &str = "accounts_email_key";

/// PostgreSQL account repository.
///
/// Uniqueness is enforced by the `accounts` table constraints.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool of at most `pool_size` connections to `url`.
    pub async fn connect(url: &str, pool_size: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_size)
            .connect(url)
            .await
            .catch()?;

        Ok(Self::new(pool))
    }

    /// Apply pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await.catch()
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, email, password
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .catch()?;

        record.map(AccountRecord::try_into_account).transpose()
    }

    async fn save(&self, account: &Account) -> Result<()> {
        let record = AccountRecord::from(account);

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.id)
        .bind(&record.email)
        .bind(&record.password)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Account>> {
        let records = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, email, password
            FROM accounts
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .catch()?;

        records
            .into_iter()
            .map(AccountRecord::try_into_account)
            .collect()
    }
}

/// Unique violations become conflicts, anything else a storage failure.
fn write_error(err: sqlx::Error) -> ApplicationError {
    let conflict = match err.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            if db.constraint() == Some(EMAIL_CONSTRAINT) {
                Some("email")
            } else {
                Some("id")
            }
        },
        _ => None,
    };

    match conflict {
        Some(field) => PersistenceError::Conflict { field }.into(),
        None => PersistenceError::storage(err).into(),
    }
}
