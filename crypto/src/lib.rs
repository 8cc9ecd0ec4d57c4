//! Redkey Cryptography Module
//!
//! Derives an Ed25519 identity from a password and salt:
//! - Argon2id for password hardening
//! - SHA-256 for seed extraction
//! - HKDF-SHA256 as a deterministic key stream
//! - Ed25519 for the keypair

pub mod hardening;
pub mod hashing;
pub mod derivation;
pub mod keys;
pub mod signing;
pub mod pipeline;

pub use hardening::*;
pub use hashing::*;
pub use derivation::*;
pub use keys::*;
pub use signing::*;
pub use pipeline::*;
