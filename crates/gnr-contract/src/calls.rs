use serde::{Deserialize, Serialize};

use gnr_types::{Address, Mutez, TokenId, TokenInfo};

/// Ambient facts the execution environment supplies with every call:
/// the authenticated sender and the mutez attached to the call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub sender: Address,
    pub amount: Mutez,
}

impl CallContext {
    /// A call with no attached mutez.
    pub fn new(sender: Address) -> Self {
        Self {
            sender,
            amount: Mutez::ZERO,
        }
    }

    /// A call carrying attached mutez (mint).
    pub fn with_amount(sender: Address, amount: Mutez) -> Self {
        Self { sender, amount }
    }
}

/// One token to create: recipient plus metadata payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintAction {
    pub to: Address,
    pub token_info: TokenInfo,
}

/// One token to destroy. `amount` 0 is a no-op element (existence and
/// permission checks still apply); any other amount must be exactly 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnAction {
    pub from: Address,
    pub token_id: TokenId,
    pub amount: u64,
}

/// One movement inside a transfer batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTx {
    pub to: Address,
    pub token_id: TokenId,
    pub amount: u64,
}

/// A group of movements declared to originate from one owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBatch {
    pub from: Address,
    pub txs: Vec<TransferTx>,
}
