use std::fmt;

use serde::{Deserialize, Serialize};

use gnr_types::{Address, Mutez, TokenId};

/// Notification emitted by a successful entry operation.
///
/// Events are returned to the caller alongside the state change, never
/// applied as side effects; forwarding them to a sink is the dispatching
/// environment's job. A failed call emits nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// An address was added to the mint whitelist.
    WhitelistAdded { address: Address },
    /// The unit price changed.
    PriceSet { price: Mutez },
    /// The pause switch was flipped.
    PauseSet { paused: bool },
    /// The administrator handed over to a new address.
    AdminChanged { new_admin: Address },
    /// Collected mutez were released to the administrator.
    Withdrawal { amount: Mutez },
    /// A token was created.
    Minted { token_id: TokenId, to: Address },
    /// A token was destroyed along with its metadata.
    Burned { token_id: TokenId, from: Address },
    /// A token changed owner.
    Transferred {
        token_id: TokenId,
        from: Address,
        to: Address,
    },
}

impl Event {
    /// Stable tag for logs and sinks.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WhitelistAdded { .. } => "WhitelistAdded",
            Self::PriceSet { .. } => "PriceSet",
            Self::PauseSet { .. } => "PauseSet",
            Self::AdminChanged { .. } => "AdminChanged",
            Self::Withdrawal { .. } => "Withdrawal",
            Self::Minted { .. } => "Minted",
            Self::Burned { .. } => "Burned",
            Self::Transferred { .. } => "Transferred",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WhitelistAdded { address } => write!(f, "whitelisted {address}"),
            Self::PriceSet { price } => write!(f, "price set to {price}"),
            Self::PauseSet { paused } => write!(f, "pause set to {paused}"),
            Self::AdminChanged { new_admin } => write!(f, "administrator is now {new_admin}"),
            Self::Withdrawal { amount } => write!(f, "withdrew {amount}"),
            Self::Minted { token_id, to } => write!(f, "minted {token_id} to {to}"),
            Self::Burned { token_id, from } => write!(f, "burned {token_id} from {from}"),
            Self::Transferred { token_id, from, to } => {
                write!(f, "transferred {token_id} from {from} to {to}")
            }
        }
    }
}
