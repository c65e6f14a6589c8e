//! Authorization gates for the Gated NFT Registry.
//!
//! Every mutating entry operation must pass its gates before the ledger
//! core stages a single write. The gates are small, synchronous, pure
//! checks over read-only views of contract storage:
//!
//! - Admin gate: caller must be the administrator (whitelist management,
//!   pricing, pause, admin hand-over, withdrawal).
//! - Mint gates: attached amount must equal the unit price, caller must be
//!   whitelisted.
//! - Transfer policy: a pluggable rule set gating transfer and burn; the
//!   reference policy denies everything while the registry is paused and
//!   only lets owners move their own tokens.
//!
//! # Quick Start
//!
//! ```rust
//! use gnr_gate::{PauseTransfer, TransferCheck, TransferPolicy};
//! use gnr_types::{Address, TokenId};
//!
//! let policy = PauseTransfer;
//! let alice = Address::named("alice");
//! let bob = Address::named("bob");
//! let check = TransferCheck {
//!     sender: &alice,
//!     from: &alice,
//!     to: &bob,
//!     token_id: TokenId::ZERO,
//! };
//! assert!(policy.check_transfer(false, &check).is_ok());
//! assert!(policy.check_transfer(true, &check).is_err());
//! ```

pub mod admin;
pub mod error;
pub mod minting;
pub mod transfer;

pub use admin::{is_administrator, require_admin};
pub use error::{GateError, PolicyError};
pub use minting::{require_exact_price, require_whitelisted};
pub use transfer::{AllowAll, NoTransfer, PauseTransfer, TransferCheck, TransferPolicy};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use gnr_types::{Address, Mutez, TokenId};

    fn check<'a>(sender: &'a Address, from: &'a Address, to: &'a Address) -> TransferCheck<'a> {
        TransferCheck {
            sender,
            from,
            to,
            token_id: TokenId::ZERO,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Admin gate
    // -----------------------------------------------------------------------
    #[test]
    fn admin_gate_only_passes_the_administrator() {
        let admin = Address::named("admin");
        let alice = Address::named("alice");
        assert!(is_administrator(&admin, &admin));
        assert!(!is_administrator(&admin, &alice));
        assert!(require_admin(&admin, &admin).is_ok());
        assert_eq!(require_admin(&admin, &alice), Err(GateError::Unauthorized));
    }

    // -----------------------------------------------------------------------
    // 2. Mint gates: price before membership
    // -----------------------------------------------------------------------
    #[test]
    fn exact_price_gate() {
        let price = Mutez::new(1_000_000);
        assert!(require_exact_price(price, price).is_ok());
        assert_eq!(
            require_exact_price(price, Mutez::ZERO),
            Err(GateError::InvalidPrice {
                expected: price,
                attached: Mutez::ZERO,
            })
        );
        // overpaying is as invalid as underpaying
        assert!(require_exact_price(price, Mutez::new(2_000_000)).is_err());
    }

    #[test]
    fn whitelist_gate() {
        let alice = Address::named("alice");
        let bob = Address::named("bob");
        let whitelist: BTreeSet<Address> = [alice.clone()].into_iter().collect();
        assert!(require_whitelisted(&whitelist, &alice).is_ok());
        assert_eq!(
            require_whitelisted(&whitelist, &bob),
            Err(GateError::NotWhitelisted(bob))
        );
    }

    // -----------------------------------------------------------------------
    // 3. PauseTransfer policy
    // -----------------------------------------------------------------------
    #[test]
    fn pause_transfer_denies_while_paused() {
        let alice = Address::named("alice");
        let bob = Address::named("bob");
        let policy = PauseTransfer;
        assert_eq!(policy.name(), "pause-transfer");
        assert!(policy.supports_transfer(false));
        assert!(!policy.supports_transfer(true));
        assert!(policy.require_supported(false).is_ok());
        // the whole-call gate carries the composed denial, not the bare code
        assert_eq!(
            policy.require_supported(true),
            Err(PolicyError::TransfersDenied {
                reason: "FA2_PAUSED".into()
            })
        );
        let err = policy
            .check_transfer(true, &check(&alice, &alice, &bob))
            .unwrap_err();
        assert_eq!(
            err,
            PolicyError::TransfersDenied {
                reason: "FA2_PAUSED".into()
            }
        );
        assert_eq!(err.to_string(), "FA2_TX_DENIED: FA2_PAUSED");
    }

    #[test]
    fn pause_transfer_is_owner_only() {
        let alice = Address::named("alice");
        let bob = Address::named("bob");
        let policy = PauseTransfer;
        // bob cannot move alice's token
        assert_eq!(
            policy.check_transfer(false, &check(&bob, &alice, &bob)),
            Err(PolicyError::NotOperator)
        );
        // the self-transfer shape used by burn passes for the owner
        assert!(policy
            .check_transfer(false, &check(&alice, &alice, &alice))
            .is_ok());
    }

    // -----------------------------------------------------------------------
    // 4. Degenerate policies
    // -----------------------------------------------------------------------
    #[test]
    fn allow_all_ignores_pause_and_sender() {
        let alice = Address::named("alice");
        let bob = Address::named("bob");
        let policy = AllowAll;
        assert!(policy.supports_transfer(true));
        assert!(policy
            .check_transfer(true, &check(&bob, &alice, &bob))
            .is_ok());
    }

    #[test]
    fn no_transfer_denies_everything() {
        let alice = Address::named("alice");
        let policy = NoTransfer;
        assert!(!policy.supports_transfer(false));
        assert_eq!(
            policy.require_supported(false),
            Err(PolicyError::TransfersUnsupported)
        );
        let err = policy
            .check_transfer(false, &check(&alice, &alice, &alice))
            .unwrap_err();
        assert_eq!(err, PolicyError::TransfersUnsupported);
        assert_eq!(err.to_string(), "FA2_TX_DENIED");
    }
}
