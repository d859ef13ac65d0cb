//! Application-level errors.

use domain::error::DomainError;

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors that can occur in the application layer.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("password and confirmation do not match")]
    PasswordMismatch,
    #[error("password does not meet strength requirements")]
    InvalidPassword,
    #[error("email is already taken")]
    EmailAlreadyTaken,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("cryptographic failure: {cause}")]
    Crypto { cause: String },
}

/// Storage failures reported by account repositories.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("an account with the same {field} already exists")]
    Conflict { field: &'static str },
    #[error("storage failure")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification for outer layers mapping errors to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller sent something unacceptable (HTTP 400).
    Validation,
    /// State prevents the operation (HTTP 409).
    Conflict,
    /// Our fault (HTTP 500).
    Internal,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::PasswordMismatch | Self::InvalidPassword => {
                ErrorKind::Validation
            },
            Self::EmailAlreadyTaken => ErrorKind::Conflict,
            Self::Persistence(_) | Self::Crypto { .. } => ErrorKind::Internal,
        }
    }
}

impl PersistenceError {
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}

/// Shortcut to turn any storage error into [`ApplicationError::Persistence`].
pub trait ToPersistence<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToPersistence<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(|e| PersistenceError::storage(e).into())
    }
}
