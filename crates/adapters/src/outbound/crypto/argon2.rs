//! Argon2id password service implementation.

use application::error::{ApplicationError, Result};
use application::ports::outbound::PasswordService;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier, SaltString,
};
use argon2::{Argon2, Params, Version};
use domain::auth::password::{
    Password, PasswordHash as DomainPasswordHash, PasswordPolicy,
};
use rand::rngs::OsRng;

/// Argon2id password service adapter.
///
/// Strength rules come from [`PasswordPolicy`], hashes are PHC strings.
pub struct Argon2PasswordService {
    params: Params,
    policy: PasswordPolicy,
}

impl Argon2PasswordService {
    /// Create a new Argon2 service with custom parameters and the default
    /// [`PasswordPolicy`].
    pub fn new(
        memory_cost: u32,
        iterations: u32,
        parallelism: u32,
        hash_length: usize,
    ) -> Result<Self> {
        let params = Params::new(
            memory_cost,
            iterations,
            parallelism,
            Some(hash_length),
        )
        .map_err(|err| ApplicationError::Crypto {
            cause: err.to_string(),
        })?;

        Ok(Self {
            params,
            policy: PasswordPolicy::default(),
        })
    }

    /// Replace strength rules.
    pub fn with_policy(mut self, policy: PasswordPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
    }

    /// Check a password against a stored hash.
    pub fn verify(
        &self,
        password: &Password,
        hash: &DomainPasswordHash,
    ) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash.as_str()) else {
            return false;
        };

        self.argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl PasswordService for Argon2PasswordService {
    fn validate(&self, password: &str) -> bool {
        self.policy.is_satisfied_by(password)
    }

    fn hash(&self, password: &Password) -> Result<DomainPasswordHash> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| ApplicationError::Crypto {
                cause: err.to_string(),
            })?;

        Ok(DomainPasswordHash::parse(hash.to_string())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Argon2PasswordService {
        // Cheap parameters, tests only.
        Argon2PasswordService::new(1024, 1, 1, 32).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = service();
        let password = Password::new("P$soW%920$n&");

        let hash = service.hash(&password).unwrap();
        assert!(hash.as_str().starts_with("$argon2id$v=19$"));
        assert!(!hash.as_str().contains(password.as_str()));

        assert!(service.verify(&password, &hash));
        assert!(!service.verify(&Password::new("wrong"), &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let service = service();
        let password = Password::new("P$soW%920$n&");

        assert_ne!(
            service.hash(&password).unwrap(),
            service.hash(&password).unwrap()
        );
    }

    #[test]
    fn test_validate_uses_policy() {
        let service = service();
        assert!(service.validate("P$soW%920$n&"));
        assert!(!service.validate("password"));

        let lax = service.with_policy(PasswordPolicy {
            min_character_classes: 1,
            ..Default::default()
        });
        assert!(lax.validate("password"));
    }

    #[test]
    fn test_invalid_params() {
        assert!(matches!(
            Argon2PasswordService::new(1024, 0, 1, 32),
            Err(ApplicationError::Crypto { .. })
        ));
    }

    #[test]
    fn test_verify_garbage_hash() {
        let service = service();
        assert!(!service.verify(
            &Password::new("password"),
            &DomainPasswordHash::new("hashed-password")
        ));
    }
}
