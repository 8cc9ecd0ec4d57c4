//! Password-to-keypair pipeline
//!
//! ```text
//! (password, salt) ──Argon2id──▶ DerivedKey ──SHA-256──▶ Seed
//!                                                         │
//!                     KeyPair ◀──Ed25519── KeyStream ◀──HKDF
//! ```
//!
//! Every stage is a pure function of its input. Intermediate secrets are
//! zeroized as soon as the next stage has consumed them.

use redkey_core::{Credentials, KeygenConfig, RedkeyResult};
use tracing::debug;

use crate::derivation::KeyStream;
use crate::hardening::harden;
use crate::hashing::extract;
use crate::keys::KeyPair;
use crate::signing::self_test;

/// Derive the keypair for already validated credentials.
pub fn derive_keypair(credentials: &Credentials) -> RedkeyResult<KeyPair> {
    let derived = harden(credentials)?;
    let seed = extract(&derived);
    drop(derived);
    debug!("Seed extracted");

    let mut stream = KeyStream::open(&seed);
    drop(seed);

    KeyPair::generate(&mut stream)
}

/// Validate raw password and salt bytes, then derive.
///
/// Empty input is rejected before any hashing happens.
pub fn derive_from_parts(password: &[u8], salt: &[u8]) -> RedkeyResult<KeyPair> {
    let credentials = Credentials::new(password, salt)?;
    derive_keypair(&credentials)
}

/// Derive for a full run configuration, including the optional self-test.
pub fn run(config: &KeygenConfig) -> RedkeyResult<KeyPair> {
    let keypair = derive_keypair(&config.credentials)?;

    if config.verify {
        self_test(&keypair)?;
        debug!("Keypair self-test passed");
    }

    Ok(keypair)
}
