use gnr_types::{Address, TokenId};

use crate::contract::NftRegistry;
use crate::error::ContractError;

/// Read-only views. These never touch storage mutably and may be called
/// between any two entry operations.
impl NftRegistry {
    /// Total supply of one token id. A present non-fungible token always
    /// has supply exactly 1; an absent id is an error, not a zero.
    pub fn total_supply(&self, token_id: TokenId) -> Result<u64, ContractError> {
        if self.storage().is_defined(token_id) {
            Ok(1)
        } else {
            Err(ContractError::TokenUndefined(token_id))
        }
    }

    /// Balance of `owner` for one token id: 1 if they own it, else 0.
    /// Fails for ids that do not exist.
    pub fn balance_of(&self, owner: &Address, token_id: TokenId) -> Result<u64, ContractError> {
        match self.storage().owner_of(token_id) {
            Some(current) if current == owner => Ok(1),
            Some(_) => Ok(0),
            None => Err(ContractError::TokenUndefined(token_id)),
        }
    }
}
