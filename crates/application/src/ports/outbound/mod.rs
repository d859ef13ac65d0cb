//! These traits define what the application needs from the outside world.

pub mod account;
pub mod crypto;
pub mod id;

pub use account::*;
pub use crypto::*;
pub use id::*;
