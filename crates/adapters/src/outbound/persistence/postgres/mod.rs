//! PostgreSQL storage backend.

mod account_repository;
pub mod models;

pub use account_repository::PgAccountRepository;
