use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Length of an [`Address`] in bytes (truncated BLAKE3 digest).
pub const ADDRESS_LEN: usize = 20;

/// Material used to derive an [`Address`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyMaterial {
    /// Derivation from an ed25519-shaped public key (32 bytes).
    PublicKey([u8; 32]),
    /// Deterministic named identity for harnesses and tests (e.g. "alice").
    Named(String),
}

/// Opaque account identity for the registry.
///
/// An `Address` is derived deterministically from [`KeyMaterial`] using
/// BLAKE3, truncated to 20 bytes. The same material always produces the
/// same address. Addresses are the only identity primitive the registry
/// sees: the execution environment authenticates them, the registry just
/// compares them.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    bytes: [u8; ADDRESS_LEN],
}

impl Address {
    /// Derive an `Address` from key material.
    pub fn derive(material: &KeyMaterial) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"gnr-address-v1:");
        match material {
            KeyMaterial::PublicKey(pk) => {
                hasher.update(b"pubkey:");
                hasher.update(pk);
            }
            KeyMaterial::Named(name) => {
                hasher.update(b"named:");
                hasher.update(name.as_bytes());
            }
        }
        let digest = hasher.finalize();
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest.as_bytes()[..ADDRESS_LEN]);
        Self { bytes }
    }

    /// Deterministic address for a human-readable name. Harness sugar for
    /// `derive(&KeyMaterial::Named(..))`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::derive(&KeyMaterial::Named(name.into()))
    }

    /// Create an ephemeral (random) address for tests and demos.
    pub fn ephemeral() -> Self {
        let mut pk = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut pk);
        Self::derive(&KeyMaterial::PublicKey(pk))
    }

    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.bytes
    }

    /// Full hex-encoded string (40 hex characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("tz:{}", hex::encode(&self.bytes[..4]))
    }

    /// Parse from a hex string (40 hex characters, optional `tz:` prefix).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("tz:").unwrap_or(s);
        let decoded = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if decoded.len() != ADDRESS_LEN {
            return Err(TypeError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: decoded.len(),
            });
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    /// Create from raw bytes. Use `derive()` for production code.
    pub fn from_raw(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self { bytes }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.short_id())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
