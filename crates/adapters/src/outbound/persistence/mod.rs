//! Account storage backends.

pub mod memory;
pub mod postgres;
