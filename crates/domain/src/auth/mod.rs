//! Authentification domain.

pub mod password;
