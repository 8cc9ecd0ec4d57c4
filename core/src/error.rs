//! Error types for redkey

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for redkey
#[derive(Error, Debug)]
pub enum RedkeyError {
    // ============ Input Errors ============
    #[error("Missing credential: {0} must not be empty")]
    MissingCredential(&'static str),

    #[error("Salt too short: need at least {min} bytes, got {got}")]
    SaltTooShort { min: usize, got: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    // ============ Derivation Errors ============
    #[error("Key derivation fault: {0}")]
    DerivationFault(String),

    // ============ Key Errors ============
    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Invalid signature")]
    InvalidSignature,

    // ============ Output Errors ============
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl RedkeyError {
    /// Whether this error is a usage error that should print usage text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            RedkeyError::MissingCredential(_)
                | RedkeyError::SaltTooShort { .. }
                | RedkeyError::Config(_)
        )
    }
}

impl From<hex::FromHexError> for RedkeyError {
    fn from(err: hex::FromHexError) -> Self {
        RedkeyError::Encoding(err.to_string())
    }
}

/// Result type alias
pub type RedkeyResult<T> = Result<T, RedkeyError>;
