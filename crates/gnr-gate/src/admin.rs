use gnr_types::Address;

use crate::error::GateError;

/// Pure predicate: is `sender` the administrator?
pub fn is_administrator(admin: &Address, sender: &Address) -> bool {
    admin == sender
}

/// Admin gate: every admin-only entrypoint calls this first.
pub fn require_admin(admin: &Address, sender: &Address) -> Result<(), GateError> {
    if is_administrator(admin, sender) {
        Ok(())
    } else {
        tracing::debug!(sender = %sender, "admin gate rejected sender");
        Err(GateError::Unauthorized)
    }
}
