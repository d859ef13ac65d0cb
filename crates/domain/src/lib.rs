//! Core types of account management: value objects, the account entity and
//! domain errors. No I/O lives here.

#![forbid(unsafe_code)]

pub mod auth;
pub mod error;
pub mod identity;
