//! Core types for redkey
//!
//! Defines the credential input and the key material produced from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{RedkeyError, RedkeyResult};

/// Length of an Ed25519 public key
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of an Ed25519 seed
pub const SEED_LENGTH: usize = 32;

/// Length of the private key encoding (seed followed by public key)
pub const PRIVATE_KEY_LENGTH: usize = SEED_LENGTH + PUBLIC_KEY_LENGTH;

/// Length of an Ed25519 signature
pub const SIGNATURE_LENGTH: usize = 64;

/// Shortest salt Argon2 accepts
pub const MIN_SALT_LENGTH: usize = 8;

/// Password and salt supplied by the caller.
///
/// Both are validated on construction (non-empty password, salt of at least
/// [`MIN_SALT_LENGTH`] bytes), so a `Credentials` value can always be handed
/// to the hardening stage.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    password: Vec<u8>,
    salt: Vec<u8>,
}

impl Credentials {
    pub fn new(password: impl Into<Vec<u8>>, salt: impl Into<Vec<u8>>) -> RedkeyResult<Self> {
        let password = password.into();
        let salt = salt.into();

        if password.is_empty() {
            return Err(RedkeyError::MissingCredential("password"));
        }
        if salt.is_empty() {
            return Err(RedkeyError::MissingCredential("salt"));
        }
        if salt.len() < MIN_SALT_LENGTH {
            return Err(RedkeyError::SaltTooShort {
                min: MIN_SALT_LENGTH,
                got: salt.len(),
            });
        }

        Ok(Self { password, salt })
    }

    pub fn password(&self) -> &[u8] {
        &self.password
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &"<redacted>")
            .field("salt_len", &self.salt.len())
            .finish()
    }
}

/// 32-byte Ed25519 public key
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        PublicKey(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s.trim())?;
        if bytes.len() != PUBLIC_KEY_LENGTH {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; PUBLIC_KEY_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(PublicKey(arr))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(0x{})", self.to_hex())
    }
}

/// 64-byte Ed25519 signature
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; SIGNATURE_LENGTH]);

impl Signature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Signature(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(0x{}...)", &self.to_hex()[..16])
    }
}

/// 64-byte Ed25519 private key: the 32-byte seed followed by the public key.
///
/// This is the same layout as the RFC 8032 "keypair bytes" and what the
/// hex/PEM writers emit. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        PrivateKey(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> RedkeyResult<Self> {
        let arr: [u8; PRIVATE_KEY_LENGTH] =
            bytes.try_into().map_err(|_| RedkeyError::InvalidPrivateKey)?;
        Ok(PrivateKey(arr))
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.0
    }

    /// The 32-byte seed half.
    pub fn seed(&self) -> [u8; SEED_LENGTH] {
        let mut seed = [0u8; SEED_LENGTH];
        seed.copy_from_slice(&self.0[..SEED_LENGTH]);
        seed
    }

    /// The public key half as stored; not checked against the seed.
    pub fn embedded_public_key(&self) -> PublicKey {
        let mut public = [0u8; PUBLIC_KEY_LENGTH];
        public.copy_from_slice(&self.0[SEED_LENGTH..]);
        PublicKey(public)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> RedkeyResult<Self> {
        let bytes = zeroize::Zeroizing::new(hex::decode(s.trim())?);
        Self::from_slice(&bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_empty() {
        assert!(matches!(
            Credentials::new("", "salt"),
            Err(RedkeyError::MissingCredential("password"))
        ));
        assert!(matches!(
            Credentials::new("password", Vec::<u8>::new()),
            Err(RedkeyError::MissingCredential("salt"))
        ));
        assert!(matches!(
            Credentials::new("password", "abc"),
            Err(RedkeyError::SaltTooShort { min: 8, got: 3 })
        ));
        assert!(Credentials::new("password", "saltsalt").is_ok());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("hunter2", "peppercorn").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_public_key_hex() {
        let pk = PublicKey::from_bytes([7u8; 32]);
        let hex = pk.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(PublicKey::from_hex(&hex).unwrap(), pk);
        assert!(PublicKey::from_hex("abcd").is_err());

        let json = serde_json::to_string(&pk).unwrap();
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);
    }

    #[test]
    fn test_private_key_halves() {
        let mut bytes = [1u8; PRIVATE_KEY_LENGTH];
        bytes[SEED_LENGTH..].copy_from_slice(&[2u8; PUBLIC_KEY_LENGTH]);
        let sk = PrivateKey::from_bytes(bytes);

        assert_eq!(sk.seed(), [1u8; SEED_LENGTH]);
        assert_eq!(sk.embedded_public_key(), PublicKey::from_bytes([2u8; 32]));
        assert_eq!(PrivateKey::from_hex(&sk.to_hex()).unwrap(), sk);
        assert!(matches!(
            PrivateKey::from_slice(&[0u8; 32]),
            Err(RedkeyError::InvalidPrivateKey)
        ));
        assert!(!format!("{:?}", sk).contains("0101"));
    }
}
