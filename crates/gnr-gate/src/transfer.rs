use gnr_types::{Address, TokenId};

use crate::error::PolicyError;

/// One proposed movement of a token, as seen by a transfer policy.
///
/// Burn reuses this shape with `from == to`: a burn is permitted exactly
/// when the policy would permit the owner to transfer the token to
/// themselves.
#[derive(Clone, Copy, Debug)]
pub struct TransferCheck<'a> {
    /// The caller of the enclosing entrypoint.
    pub sender: &'a Address,
    /// The declared current owner.
    pub from: &'a Address,
    /// The declared recipient.
    pub to: &'a Address,
    /// The token being moved.
    pub token_id: TokenId,
}

/// Pluggable rule set gating transfer and burn.
///
/// The policy is stateless; the pause flag lives in contract storage and is
/// passed in on every check. Implementations must be deterministic: the
/// ledger core calls them during the validation pass and relies on getting
/// the same answer if it asked again.
pub trait TransferPolicy: Send + Sync {
    /// Policy name for logs and storage dumps.
    fn name(&self) -> &'static str;

    /// Whether the policy supports transfers at all in the given state.
    /// When this is `false` the whole transfer or burn call is rejected
    /// before any per-item check runs.
    fn supports_transfer(&self, paused: bool) -> bool;

    /// Whole-call gate over [`Self::supports_transfer`], with the policy's
    /// own denial error. Rejects even an empty batch.
    fn require_supported(&self, paused: bool) -> Result<(), PolicyError> {
        if self.supports_transfer(paused) {
            Ok(())
        } else {
            Err(PolicyError::TransfersUnsupported)
        }
    }

    /// Per-item permission check.
    fn check_transfer(&self, paused: bool, check: &TransferCheck<'_>) -> Result<(), PolicyError>;
}

/// The reference policy: transfers are denied while the registry is paused,
/// and only the owner may move (or burn) a token.
#[derive(Clone, Copy, Debug, Default)]
pub struct PauseTransfer;

impl TransferPolicy for PauseTransfer {
    fn name(&self) -> &'static str {
        "pause-transfer"
    }

    fn supports_transfer(&self, paused: bool) -> bool {
        !paused
    }

    fn require_supported(&self, paused: bool) -> Result<(), PolicyError> {
        if paused {
            Err(PolicyError::TransfersDenied {
                reason: "FA2_PAUSED".into(),
            })
        } else {
            Ok(())
        }
    }

    fn check_transfer(&self, paused: bool, check: &TransferCheck<'_>) -> Result<(), PolicyError> {
        if paused {
            return Err(PolicyError::TransfersDenied {
                reason: "FA2_PAUSED".into(),
            });
        }
        if check.sender != check.from {
            return Err(PolicyError::NotOperator);
        }
        Ok(())
    }
}

/// Permissive policy for embedding and tests: anyone may move anything,
/// pause is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl TransferPolicy for AllowAll {
    fn name(&self) -> &'static str {
        "allow-all"
    }

    fn supports_transfer(&self, _paused: bool) -> bool {
        true
    }

    fn check_transfer(&self, _paused: bool, _check: &TransferCheck<'_>) -> Result<(), PolicyError> {
        Ok(())
    }
}

/// Soulbound policy: tokens can be minted but never moved or burned.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTransfer;

impl TransferPolicy for NoTransfer {
    fn name(&self) -> &'static str {
        "no-transfer"
    }

    fn supports_transfer(&self, _paused: bool) -> bool {
        false
    }

    fn check_transfer(&self, _paused: bool, _check: &TransferCheck<'_>) -> Result<(), PolicyError> {
        Err(PolicyError::TransfersUnsupported)
    }
}
