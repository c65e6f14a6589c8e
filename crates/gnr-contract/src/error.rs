use gnr_gate::{GateError, PolicyError};
use gnr_types::{Address, Mutez, TokenId, TypeError};

/// Errors produced by registry entry operations.
///
/// Every error aborts the whole enclosing call: the storage a failed call
/// was given is exactly the storage it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("only the administrator may call this entrypoint")]
    Unauthorized,

    #[error("address {0} is already whitelisted")]
    AlreadyWhitelisted(Address),

    #[error("address {0} is not whitelisted")]
    NotWhitelisted(Address),

    #[error("invalid price: expected {expected}, attached {attached}")]
    InvalidPrice { expected: Mutez, attached: Mutez },

    #[error("FA2_TOKEN_UNDEFINED: {0}")]
    TokenUndefined(TokenId),

    #[error("FA2_INSUFFICIENT_BALANCE: {token_id}")]
    InsufficientBalance { token_id: TokenId },

    #[error("insufficient contract funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Mutez, available: Mutez },

    #[error(transparent)]
    PolicyDenied(#[from] PolicyError),

    #[error(transparent)]
    Amount(#[from] TypeError),
}

impl From<GateError> for ContractError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Unauthorized => ContractError::Unauthorized,
            GateError::NotWhitelisted(addr) => ContractError::NotWhitelisted(addr),
            GateError::InvalidPrice { expected, attached } => {
                ContractError::InvalidPrice { expected, attached }
            }
        }
    }
}
