//! Identity domain.

pub mod account;
pub mod email;
pub mod id;
