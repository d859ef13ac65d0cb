//! Data Transfer Objects for the application layer.

use domain::identity::email::EmailAddress;

/// Request DTO for account creation.
#[derive(Clone)]
pub struct CreateAccountRequestDto {
    /// Already validated email address.
    pub email: EmailAddress,
    /// Plaintext password.
    pub password: String,
    /// Plaintext password typed a second time.
    pub confirm_password: String,
}

impl std::fmt::Debug for CreateAccountRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountRequestDto")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}
