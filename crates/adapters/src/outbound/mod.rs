//! Outbound adapters.

pub mod crypto;
pub mod id;
pub mod persistence;
