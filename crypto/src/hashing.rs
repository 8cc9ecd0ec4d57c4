//! Seed extraction using SHA-256

use redkey_core::SEED_LENGTH;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::hardening::DerivedKey;

/// Uniform 32-byte seed; the input keying material for the key stream.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Seed(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }
}

/// Collapse the hardened key into a seed: `SHA-256(derived_key)`.
pub fn extract(derived_key: &DerivedKey) -> Seed {
    let mut hasher = Sha256::new();
    hasher.update(derived_key.as_bytes());
    let result = hasher.finalize();
    let mut bytes = [0u8; SEED_LENGTH];
    bytes.copy_from_slice(&result);
    Seed(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardening::harden;
    use redkey_core::Credentials;

    #[test]
    fn test_extract_is_sha256() {
        let seed = extract(&DerivedKey::from_bytes([0u8; 32]));
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
    }

    #[test]
    fn test_extract_golden() {
        let creds = Credentials::new("correct horse", "battery staple").unwrap();
        let seed = extract(&harden(&creds).unwrap());
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "fff501138812170a1b1310b4d2556cd8bce544b78837a5b2e408d4bfc111317a"
        );
    }
}
