//! Password hardening using Argon2id
//!
//! The cost parameters are part of the key format: changing any of them
//! changes every identity ever derived. New parameter sets get a new
//! [`HardeningParams`] constant rather than editing [`HardeningParams::V1`].

use argon2::{Algorithm, Argon2, Params, Version};
use redkey_core::{Credentials, RedkeyError, RedkeyResult};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Output length of the hardening stage
pub const DERIVED_KEY_LENGTH: usize = 32;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardeningParams {
    /// Memory cost in KiB
    pub m_cost: u32,
    /// Iterations
    pub t_cost: u32,
    /// Lanes
    pub p_cost: u32,
}

impl HardeningParams {
    /// 1 iteration, 64 MiB, 4 lanes, Argon2 v1.3
    pub const V1: HardeningParams = HardeningParams {
        m_cost: 64 * 1024,
        t_cost: 1,
        p_cost: 4,
    };
}

/// 32-byte output of the hardening stage (zeroizes on drop)
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; DERIVED_KEY_LENGTH]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; DERIVED_KEY_LENGTH]) -> Self {
        DerivedKey(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DERIVED_KEY_LENGTH] {
        &self.0
    }
}

/// Run Argon2id over the credentials with [`HardeningParams::V1`].
pub fn harden(credentials: &Credentials) -> RedkeyResult<DerivedKey> {
    harden_with(credentials, HardeningParams::V1)
}

/// Run Argon2id with explicit cost parameters.
pub(crate) fn harden_with(
    credentials: &Credentials,
    params: HardeningParams,
) -> RedkeyResult<DerivedKey> {
    let params = Params::new(
        params.m_cost,
        params.t_cost,
        params.p_cost,
        Some(DERIVED_KEY_LENGTH),
    )
    .map_err(|e| RedkeyError::DerivationFault(format!("argon2 params: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = DerivedKey([0u8; DERIVED_KEY_LENGTH]);
    argon2
        .hash_password_into(credentials.password(), credentials.salt(), &mut key.0)
        .map_err(|e| RedkeyError::DerivationFault(format!("argon2: {}", e)))?;

    debug!(
        m_cost = argon2.params().m_cost(),
        t_cost = argon2.params().t_cost(),
        p_cost = argon2.params().p_cost(),
        "Password hardened"
    );

    Ok(key)
}
