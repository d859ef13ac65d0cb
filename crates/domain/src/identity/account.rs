//! Account entity and its typed builder.

use crate::auth::password::PasswordHash;
use crate::identity::email::EmailAddress;
use crate::identity::id::AccountId;

/// A registered account.
///
/// Fields are only readable. Once built, an account keeps its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    email: EmailAddress,
    password: PasswordHash,
}

impl Account {
    /// Start building an [`Account`].
    pub fn builder() -> AccountBuilder<Missing, Missing, Missing> {
        AccountBuilder::new()
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Hashed password. The plaintext is never kept.
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }
}

/// Marker type for missing value.
#[derive(Debug)]
pub struct Missing;

/// Marker type for present value.
#[derive(Debug)]
pub struct Present<T>(pub T);

/// A builder to track presence of `Id`, `Email` and `Password`.
#[derive(Debug)]
pub struct AccountBuilder<Id, Email, Pwd> {
    id: Id,
    email: Email,
    password: Pwd,
}

impl AccountBuilder<Missing, Missing, Missing> {
    /// Creates a new [`AccountBuilder`] with all required fields initialized
    /// as [`Missing`].
    pub fn new() -> Self {
        Self {
            id: Missing,
            email: Missing,
            password: Missing,
        }
    }
}

impl Default for AccountBuilder<Missing, Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Email, Pwd> AccountBuilder<Missing, Email, Pwd> {
    /// Sets account identity using [`AccountId`].
    pub fn id(
        self,
        id: AccountId,
    ) -> AccountBuilder<Present<AccountId>, Email, Pwd> {
        AccountBuilder {
            id: Present(id),
            email: self.email,
            password: self.password,
        }
    }
}

impl<Id, Pwd> AccountBuilder<Id, Missing, Pwd> {
    /// Sets account email using [`EmailAddress`] value object.
    pub fn email(
        self,
        email: EmailAddress,
    ) -> AccountBuilder<Id, Present<EmailAddress>, Pwd> {
        AccountBuilder {
            id: self.id,
            email: Present(email),
            password: self.password,
        }
    }
}

impl<Id, Email> AccountBuilder<Id, Email, Missing> {
    /// Sets the hashed password.
    pub fn password(
        self,
        password: PasswordHash,
    ) -> AccountBuilder<Id, Email, Present<PasswordHash>> {
        AccountBuilder {
            id: self.id,
            email: self.email,
            password: Present(password),
        }
    }
}

impl
    AccountBuilder<
        Present<AccountId>,
        Present<EmailAddress>,
        Present<PasswordHash>,
    >
{
    /// Finalizes build once identity, email and hash are all provided.
    pub fn build(self) -> Account {
        let AccountBuilder {
            id: Present(id),
            email: Present(email),
            password: Present(password),
        } = self;

        Account {
            id,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_in_any_order() {
        let email = EmailAddress::parse("test@test.com").unwrap();

        let a = Account::builder()
            .id(AccountId::new("id"))
            .email(email.clone())
            .password(PasswordHash::new("hashed-password"))
            .build();
        let b = Account::builder()
            .password(PasswordHash::new("hashed-password"))
            .email(email.clone())
            .id(AccountId::new("id"))
            .build();

        assert_eq!(a, b);
        assert_eq!(a.id().as_str(), "id");
        assert_eq!(a.email(), &email);
        assert_eq!(a.password().as_str(), "hashed-password");
    }
}
