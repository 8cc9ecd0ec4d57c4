//! Key output: stdout lines, hex files and PEM files

use pem::{EncodeConfig, LineEnding, Pem};
use redkey_core::{OutputConfig, PemEncoding, RedkeyError, RedkeyResult};
use redkey_crypto::KeyPair;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use zeroize::Zeroizing;

pub const PUBLIC_HEX_FILE: &str = "public";
pub const PRIVATE_HEX_FILE: &str = "private";
pub const PUBLIC_PEM_FILE: &str = "public.pem";
pub const PRIVATE_PEM_FILE: &str = "private.pem";

pub const PUBLIC_PEM_LABEL: &str = "PUBLIC KEY";
pub const PRIVATE_PEM_LABEL: &str = "PRIVATE KEY";

/// JSON output format
#[derive(Serialize)]
struct KeypairJson {
    public_key: String,
    private_key: String,
}

/// Print `Public Key: <hex>` and `Private Key: <hex>`.
pub fn print_keys<W: Write>(out: &mut W, keypair: &KeyPair) -> io::Result<()> {
    writeln!(out, "Public Key: {}", keypair.public_key().to_hex())?;
    writeln!(out, "Private Key: {}", keypair.private_key().to_hex())?;
    Ok(())
}

/// Print both keys as a pretty JSON object.
pub fn print_keys_json<W: Write>(out: &mut W, keypair: &KeyPair) -> io::Result<()> {
    let output = KeypairJson {
        public_key: keypair.public_key().to_hex(),
        private_key: keypair.private_key().to_hex(),
    };
    let json = Zeroizing::new(serde_json::to_string_pretty(&output)?);
    writeln!(out, "{}", json.as_str())
}

/// PEM-armor `contents` under `label` with LF line endings.
pub fn pem_encode(label: &str, contents: &[u8]) -> String {
    let block = Pem::new(label, contents);
    pem::encode_config(&block, EncodeConfig::new().set_line_ending(LineEnding::LF))
}

/// Decode a single PEM block, ignoring its label.
pub fn pem_decode(text: &str) -> RedkeyResult<Zeroizing<Vec<u8>>> {
    let block = pem::parse(text).map_err(|e| RedkeyError::Encoding(e.to_string()))?;
    Ok(Zeroizing::new(block.into_contents()))
}

/// Write the files requested by `config`. Returns the paths written, in
/// order. Stops at the first failure.
pub fn write_key_files(config: &OutputConfig, keypair: &KeyPair) -> RedkeyResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    if config.write_hex {
        let public = keypair.public_key().to_hex();
        let private = Zeroizing::new(keypair.private_key().to_hex());

        written.push(write_file(&config.dir.join(PUBLIC_HEX_FILE), public.as_bytes())?);
        written.push(write_file(&config.dir.join(PRIVATE_HEX_FILE), private.as_bytes())?);
    }

    if config.write_pem {
        let (public, private) = match config.pem_encoding {
            PemEncoding::Raw => {
                warn!("PEM files carry raw key bytes, not SPKI/PKCS#8; use --pem-encoding pkcs8 for standard tooling");
                let public = pem_encode(PUBLIC_PEM_LABEL, keypair.public_key().as_bytes());
                let private = Zeroizing::new(pem_encode(
                    PRIVATE_PEM_LABEL,
                    keypair.private_key().as_bytes(),
                ));
                (public, private)
            }
            PemEncoding::Pkcs8 => (
                keypair.public_key_spki_pem()?,
                keypair.private_key_pkcs8_pem()?,
            ),
        };

        written.push(write_file(&config.dir.join(PUBLIC_PEM_FILE), public.as_bytes())?);
        written.push(write_file(&config.dir.join(PRIVATE_PEM_FILE), private.as_bytes())?);
    }

    Ok(written)
}

/// Create or truncate `path`, mode 0644 on unix.
fn write_file(path: &Path, contents: &[u8]) -> RedkeyResult<PathBuf> {
    let to_error = |source| RedkeyError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(contents).map_err(to_error)?;
    file.flush().map_err(to_error)?;

    info!(path = %path.display(), bytes = contents.len(), "Key file written");
    Ok(path.to_path_buf())
}
