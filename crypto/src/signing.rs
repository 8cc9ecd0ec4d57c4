//! Digital signature operations using Ed25519

use ed25519_dalek::Signer;
use redkey_core::{PublicKey, RedkeyError, RedkeyResult, Signature};

use crate::keys::{public_key_to_ed25519, KeyPair};

/// Message signed by [`self_test`]
pub const SELF_TEST_MESSAGE: &[u8] = b"redkey keypair verification";

/// Sign a message using Ed25519
pub fn sign(keypair: &KeyPair, message: &[u8]) -> Signature {
    let signature = keypair.signing_key().sign(message);
    Signature::from_bytes(signature.to_bytes())
}

/// Verify a signature using Ed25519
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> RedkeyResult<()> {
    let verifying_key = public_key_to_ed25519(public_key)?;
    let sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());

    verifying_key
        .verify_strict(message, &sig)
        .map_err(|_| RedkeyError::InvalidSignature)
}

/// Sign [`SELF_TEST_MESSAGE`] and verify it against the keypair's public key.
///
/// Any failure is reported as a derivation fault.
pub fn self_test(keypair: &KeyPair) -> RedkeyResult<()> {
    let signature = sign(keypair, SELF_TEST_MESSAGE);
    verify(&keypair.public_key(), SELF_TEST_MESSAGE, &signature).map_err(|e| {
        RedkeyError::DerivationFault(format!("keypair failed self-test: {}", e))
    })
}
