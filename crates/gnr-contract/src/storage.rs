use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use gnr_types::{Address, Mutez, TokenId, TokenMetadata};

/// The registry's durable storage: the complete state of the contract.
///
/// Fields are public because the environment exposes storage for external
/// queries by field name; mutation, however, only ever happens inside the
/// entry operations of [`crate::NftRegistry`], which stage every write and
/// commit only after all preconditions for the call have passed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStorage {
    /// The single administrator.
    pub administrator: Address,
    /// Addresses permitted to mint. Grows only.
    pub whitelist: BTreeSet<Address>,
    /// Unit price a mint call must attach. Initially zero.
    pub token_price: Mutez,
    /// Global pause switch consulted by the transfer policy.
    pub paused: bool,
    /// Next id to allocate. Never decremented, ids are never reused.
    pub next_token_id: TokenId,
    /// Token id to current owner. An id is present iff the token exists.
    pub ledger: BTreeMap<TokenId, Address>,
    /// Token id to immutable metadata. Keyed identically to `ledger`.
    pub token_metadata: BTreeMap<TokenId, TokenMetadata>,
    /// Mutez collected by mint calls, withdrawable by the administrator.
    pub balance: Mutez,
}

impl ContractStorage {
    /// Fresh storage: no tokens, empty whitelist, zero price, unpaused.
    pub fn new(administrator: Address) -> Self {
        Self {
            administrator,
            whitelist: BTreeSet::new(),
            token_price: Mutez::ZERO,
            paused: false,
            next_token_id: TokenId::ZERO,
            ledger: BTreeMap::new(),
            token_metadata: BTreeMap::new(),
            balance: Mutez::ZERO,
        }
    }

    /// Whether a token currently exists (has been minted and not burned).
    pub fn is_defined(&self, token_id: TokenId) -> bool {
        self.ledger.contains_key(&token_id)
    }

    /// The current owner of a token, if it exists.
    pub fn owner_of(&self, token_id: TokenId) -> Option<&Address> {
        self.ledger.get(&token_id)
    }

    /// Number of currently existing tokens.
    pub fn token_count(&self) -> usize {
        self.ledger.len()
    }

    /// Structural invariants every operation must preserve:
    /// ledger and metadata hold identical key sets, and no existing id is
    /// at or past the allocation counter.
    pub fn invariants_hold(&self) -> bool {
        self.ledger.len() == self.token_metadata.len()
            && self.ledger.keys().all(|id| self.token_metadata.contains_key(id))
            && self.ledger.keys().all(|id| *id < self.next_token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnr_types::TokenInfo;

    #[test]
    fn fresh_storage_is_empty_and_consistent() {
        let storage = ContractStorage::new(Address::named("admin"));
        assert_eq!(storage.token_price, Mutez::ZERO);
        assert!(!storage.paused);
        assert_eq!(storage.next_token_id, TokenId::ZERO);
        assert_eq!(storage.token_count(), 0);
        assert!(storage.whitelist.is_empty());
        assert!(storage.invariants_hold());
    }

    #[test]
    fn invariants_detect_divergent_maps() {
        let mut storage = ContractStorage::new(Address::named("admin"));
        storage
            .ledger
            .insert(TokenId::ZERO, Address::named("alice"));
        // metadata missing for token 0
        assert!(!storage.invariants_hold());
        storage.token_metadata.insert(
            TokenId::ZERO,
            TokenMetadata::new(TokenId::ZERO, TokenInfo::new()),
        );
        // counter still says no token was allocated
        assert!(!storage.invariants_hold());
        storage.next_token_id = TokenId::new(1);
        assert!(storage.invariants_hold());
    }

    #[test]
    fn storage_serde_round_trip() {
        let mut storage = ContractStorage::new(Address::named("admin"));
        storage.whitelist.insert(Address::named("alice"));
        storage.token_price = Mutez::new(1_000_000);
        let json = serde_json::to_string(&storage).unwrap();
        let back: ContractStorage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, storage);
    }
}
