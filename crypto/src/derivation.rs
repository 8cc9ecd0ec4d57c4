//! Deterministic key stream using HKDF-SHA256
//!
//! A [`KeyStream`] is the HKDF expansion of a [`Seed`] with no salt and no
//! info string, read front to back. Each opened stream tracks its own
//! position; the seed itself is never modified.

use hkdf::Hkdf;
use redkey_core::{RedkeyError, RedkeyResult};
use sha2::Sha256;
use tracing::trace;
use zeroize::Zeroizing;

use crate::hashing::Seed;

/// Longest output HKDF-SHA256 can expand to (255 blocks of 32 bytes)
pub const MAX_STREAM_LENGTH: usize = 255 * 32;

/// Keyed expansion of a seed with an explicit read position
pub struct KeyStream {
    hk: Hkdf<Sha256>,
    position: usize,
}

impl KeyStream {
    /// Open a stream at position 0.
    pub fn open(seed: &Seed) -> Self {
        Self {
            hk: Hkdf::<Sha256>::new(None, seed.as_bytes()),
            position: 0,
        }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left before the stream is exhausted
    pub fn remaining(&self) -> usize {
        MAX_STREAM_LENGTH - self.position
    }

    /// Fill `out` with the next `out.len()` bytes of the stream.
    ///
    /// On failure the position is left unchanged.
    pub fn read_into(&mut self, out: &mut [u8]) -> RedkeyResult<()> {
        if out.len() > self.remaining() {
            return Err(RedkeyError::DerivationFault(format!(
                "key stream exhausted: requested {} bytes at position {}, limit {}",
                out.len(),
                self.position,
                MAX_STREAM_LENGTH
            )));
        }

        // HKDF-Expand blocks don't depend on the output length, so the
        // prefix of a longer expansion is the shorter expansion.
        let end = self.position + out.len();
        let mut buf = Zeroizing::new(vec![0u8; end]);
        self.hk
            .expand(&[], &mut buf)
            .map_err(|e| RedkeyError::DerivationFault(format!("hkdf expand: {}", e)))?;

        out.copy_from_slice(&buf[self.position..end]);
        trace!(from = self.position, to = end, "Key stream read");
        self.position = end;

        Ok(())
    }

    /// Read the next `n` bytes.
    pub fn read(&mut self, n: usize) -> RedkeyResult<Zeroizing<Vec<u8>>> {
        let mut out = Zeroizing::new(vec![0u8; n]);
        self.read_into(&mut out[..])?;
        Ok(out)
    }

    /// Read the next `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> RedkeyResult<Zeroizing<[u8; N]>> {
        let mut out = Zeroizing::new([0u8; N]);
        self.read_into(&mut out[..])?;
        Ok(out)
    }
}
