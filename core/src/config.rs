//! Configuration types for redkey
//!
//! A [`KeygenConfig`] is built once from the command line and passed by
//! reference into the pipeline and output stages.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RedkeyError;
use crate::types::Credentials;

/// Full configuration for one derivation run
#[derive(Debug, Clone)]
pub struct KeygenConfig {
    /// Password and salt
    pub credentials: Credentials,

    /// Which files to write, and where
    pub output: OutputConfig,

    /// Sign and verify a test message after derivation
    pub verify: bool,
}

impl KeygenConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            output: OutputConfig::default(),
            verify: false,
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Output file configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Write `public` and `private` as hex text
    pub write_hex: bool,

    /// Write `public.pem` and `private.pem`
    pub write_pem: bool,

    /// Body format for the PEM files
    pub pem_encoding: PemEncoding,

    /// Directory the files are written into
    pub dir: PathBuf,
}

impl OutputConfig {
    /// Whether any file output was requested
    pub fn writes_files(&self) -> bool {
        self.write_hex || self.write_pem
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_hex: false,
            write_pem: false,
            pem_encoding: PemEncoding::Raw,
            dir: PathBuf::from("."),
        }
    }
}

/// PEM body format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PemEncoding {
    /// Raw key bytes under `PUBLIC KEY` / `PRIVATE KEY`. Not readable by
    /// standard tooling, but byte-identical to previously written files.
    #[default]
    Raw,

    /// SubjectPublicKeyInfo and PKCS#8 v1 documents.
    Pkcs8,
}

impl fmt::Display for PemEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PemEncoding::Raw => write!(f, "raw"),
            PemEncoding::Pkcs8 => write!(f, "pkcs8"),
        }
    }
}

impl FromStr for PemEncoding {
    type Err = RedkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(PemEncoding::Raw),
            "pkcs8" => Ok(PemEncoding::Pkcs8),
            other => Err(RedkeyError::Config(format!(
                "unknown PEM encoding '{}', expected 'raw' or 'pkcs8'",
                other
            ))),
        }
    }
}
