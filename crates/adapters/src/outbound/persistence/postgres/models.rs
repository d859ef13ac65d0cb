//! Database models for PostgreSQL.

use application::error::Result;
use domain::auth::password::PasswordHash;
use domain::identity::account::Account;
use domain::identity::email::{CaseFolding, EmailAddress, EmailPolicy};
use domain::identity::id::AccountId;
use sqlx::FromRow;

/// Stored addresses are already normalized, never fold them again.
const STORED_EMAIL: EmailPolicy = EmailPolicy {
    trim: false,
    case: CaseFolding::Preserve,
};

/// Account record as stored in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AccountRecord {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl AccountRecord {
    /// Convert to [`Account`].
    pub fn try_into_account(self) -> Result<Account> {
        Ok(Account::builder()
            .id(AccountId::new(self.id))
            .email(EmailAddress::parse_with(self.email, &STORED_EMAIL)?)
            .password(PasswordHash::new(self.password))
            .build())
    }
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().to_string(),
            password: account.password().as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_stored_case() {
        let policy = EmailPolicy {
            case: CaseFolding::DomainOnly,
            ..Default::default()
        };
        let email =
            EmailAddress::parse_with("John@Example.org", &policy).unwrap();
        let account = Account::builder()
            .id(AccountId::new("id"))
            .email(email)
            .password(PasswordHash::new("hashed-password"))
            .build();

        let record = AccountRecord::from(&account);
        assert_eq!(record.email, "John@example.org");
        assert_eq!(record.try_into_account().unwrap(), account);
    }

    #[test]
    fn test_any_saved_id_reads_back() {
        let long = "x".repeat(65);
        for id in ["", "an id", long.as_str()] {
            let account = Account::builder()
                .id(AccountId::new(id))
                .email(EmailAddress::parse("test@test.com").unwrap())
                .password(PasswordHash::new("hashed-password"))
                .build();

            let record = AccountRecord::from(&account);
            assert_eq!(record.try_into_account().unwrap(), account);
        }
    }

    #[test]
    fn test_reject_corrupted_email() {
        let record = AccountRecord {
            id: "id".into(),
            email: "not-an-email".into(),
            password: "hashed-password".into(),
        };

        assert!(record.try_into_account().is_err());
    }
}
