use std::collections::BTreeSet;

use gnr_types::{Address, Mutez};

use crate::error::GateError;

/// Price gate: the amount attached to a mint call must equal the current
/// unit price exactly. The price is paid once per call, not per minted
/// token; over- and underpayment are rejected alike.
pub fn require_exact_price(expected: Mutez, attached: Mutez) -> Result<(), GateError> {
    if attached == expected {
        Ok(())
    } else {
        Err(GateError::InvalidPrice { expected, attached })
    }
}

/// Whitelist gate: the *sender* of a mint call must be whitelisted. The
/// recipients of the minted tokens are unconstrained.
pub fn require_whitelisted(
    whitelist: &BTreeSet<Address>,
    sender: &Address,
) -> Result<(), GateError> {
    if whitelist.contains(sender) {
        Ok(())
    } else {
        tracing::debug!(sender = %sender, "mint rejected: sender not whitelisted");
        Err(GateError::NotWhitelisted(sender.clone()))
    }
}
