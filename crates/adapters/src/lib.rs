//! Adapters plugging concrete technologies into the application ports.

#![forbid(unsafe_code)]

pub mod outbound;
