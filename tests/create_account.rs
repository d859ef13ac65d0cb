use std::sync::Arc;

use accounts::config::{Argon2, Configuration};
use accounts::error::Error;
use accounts::{AppState, with_repository};
use adapters::outbound::crypto::Argon2PasswordService;
use adapters::outbound::persistence::memory::InMemoryAccountRepository;
use application::error::{ApplicationError, PersistenceError};
use application::ports::outbound::AccountRepository;
use domain::auth::password::Password;
use domain::error::DomainError;

const EMAIL: &str = "test@test.com";
const PASSWORD: &str = "Correct-Horse-7";

fn cheap_argon2() -> Argon2 {
    Argon2 {
        memory_cost: 1024,
        iterations: 1,
        parallelism: 1,
        hash_length: 32,
    }
}

fn state() -> AppState {
    let mut config = Configuration::default();
    config.argon2 = cheap_argon2();

    with_repository(config, Arc::new(InMemoryAccountRepository::new()))
        .unwrap()
}

#[tokio::test]
async fn test_create_account() {
    let state = state();

    let account = state.create(" Test@Test.com ", PASSWORD, PASSWORD).await;
    let account = account.unwrap();

    assert_eq!(account.email().as_str(), EMAIL);
    assert_eq!(account.id().as_str().len(), 36);
    assert_ne!(account.password().as_str(), PASSWORD);

    let argon2 = cheap_argon2();
    let hasher = Argon2PasswordService::new(
        argon2.memory_cost,
        argon2.iterations,
        argon2.parallelism,
        argon2.hash_length,
    )
    .unwrap();
    assert!(hasher.verify(&Password::new(PASSWORD), account.password()));

    assert_eq!(state.accounts.get_all().await.unwrap(), vec![account]);
}

#[tokio::test]
async fn test_password_mismatch() {
    let state = state();

    let err = state.create(EMAIL, PASSWORD, "Correct-Horse-8").await;

    assert!(matches!(
        err,
        Err(Error::Application(ApplicationError::PasswordMismatch))
    ));
    assert!(state.accounts.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_weak_password() {
    let state = state();

    let err = state.create(EMAIL, "password", "password").await;

    assert!(matches!(
        err,
        Err(Error::Application(ApplicationError::InvalidPassword))
    ));
    assert!(state.accounts.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_email_taken_after_folding() {
    let state = state();
    state.create(EMAIL, PASSWORD, PASSWORD).await.unwrap();

    let err = state.create("TEST@test.COM", PASSWORD, PASSWORD).await;

    assert!(matches!(
        err,
        Err(Error::Application(ApplicationError::EmailAlreadyTaken))
    ));
    assert_eq!(state.accounts.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_email() {
    let state = state();

    let err = state.create("not-an-email", PASSWORD, PASSWORD).await;

    assert!(matches!(
        err,
        Err(Error::Application(ApplicationError::Domain(
            DomainError::InvalidEmailFormat
        )))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creations_store_one_account() {
    let state = state();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move {
                state.create(EMAIL, PASSWORD, PASSWORD).await
            })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(Error::Application(ApplicationError::EmailAlreadyTaken)) => {},
            Err(Error::Application(ApplicationError::Persistence(
                PersistenceError::Conflict { field: "email" },
            ))) => {},
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(state.accounts.get_all().await.unwrap().len(), 1);
}
