use gnr_types::{Address, Mutez};
use thiserror::Error;

/// Errors produced by the admin and mint gates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("only the administrator may call this entrypoint")]
    Unauthorized,

    #[error("address {0} is not whitelisted")]
    NotWhitelisted(Address),

    #[error("invalid price: expected {expected}, attached {attached}")]
    InvalidPrice { expected: Mutez, attached: Mutez },
}

/// Denials produced by a transfer policy.
///
/// The FA2 wire codes are preserved verbatim in the rendered messages so a
/// rejected call reads the same as the reference contract's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The policy denies transfers in the current state (e.g. paused).
    #[error("FA2_TX_DENIED: {reason}")]
    TransfersDenied { reason: String },

    /// The policy never supports transfers at all.
    #[error("FA2_TX_DENIED")]
    TransfersUnsupported,

    /// The sender is not allowed to move tokens owned by the declared
    /// source address.
    #[error("FA2_NOT_OPERATOR")]
    NotOperator,
}
