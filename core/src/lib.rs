//! Redkey Core Library
//!
//! Shared types, errors and configuration for deriving Ed25519 identity
//! keys from a password and salt.

pub mod types;
pub mod error;
pub mod config;

pub use types::*;
pub use error::*;
pub use config::*;
