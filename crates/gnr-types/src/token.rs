use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-token metadata payload: string keys to opaque byte values.
///
/// Values are opaque to the registry, typically content URIs or
/// hash commitments resolved off-chain.
pub type TokenInfo = BTreeMap<String, Vec<u8>>;

/// Identifier of one non-fungible token.
///
/// Allocated sequentially by the ledger core, starting at 0. An id is
/// never reassigned, even after the token it named is burned.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenId(u64);

impl TokenId {
    /// The first token id.
    pub const ZERO: TokenId = TokenId(0);

    /// Wrap a raw id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub const fn next(&self) -> TokenId {
        TokenId(self.0 + 1)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token #{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Immutable metadata record attached to a minted token.
///
/// Created together with the ledger entry at mint, destroyed together with
/// it at burn. Never mutated in between.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The id this record belongs to.
    pub token_id: TokenId,
    /// Opaque key/value payload supplied at mint.
    pub token_info: TokenInfo,
}

impl TokenMetadata {
    /// Build a metadata record from an id and payload.
    pub fn new(token_id: TokenId, token_info: TokenInfo) -> Self {
        Self {
            token_id,
            token_info,
        }
    }

    /// Convenience: a single-entry payload, e.g. an `ipfs://` URI.
    pub fn single(token_id: TokenId, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let mut token_info = TokenInfo::new();
        token_info.insert(key.into(), value.into());
        Self {
            token_id,
            token_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_strictly_increasing() {
        let id = TokenId::ZERO;
        assert_eq!(id.next(), TokenId::new(1));
        assert_eq!(id.next().next(), TokenId::new(2));
        assert!(id < id.next());
    }

    #[test]
    fn display_shape() {
        assert_eq!(TokenId::new(7).to_string(), "token #7");
    }

    #[test]
    fn single_builds_one_entry_payload() {
        let md = TokenMetadata::single(TokenId::new(3), "uri", b"ipfs://x".to_vec());
        assert_eq!(md.token_id, TokenId::new(3));
        assert_eq!(md.token_info.get("uri").unwrap(), b"ipfs://x");
        assert_eq!(md.token_info.len(), 1);
    }

    #[test]
    fn metadata_serde_round_trip() {
        let md = TokenMetadata::single(TokenId::new(1), "uri", b"ipfs://y".to_vec());
        let json = serde_json::to_string(&md).unwrap();
        let back: TokenMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, md);
    }
}
