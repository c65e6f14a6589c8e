//! Ledger core for the Gated NFT Registry (GNR).
//!
//! This crate is the heart of GNR. It provides:
//! - `ContractStorage`: the contract's durable state (admin, whitelist,
//!   price, pause, allocation counter, ledger, metadata, collected balance)
//! - `NftRegistry`: the entry operations with whole-call atomicity
//!   (validate-then-commit; a failed call changes nothing)
//! - `Event`: notifications returned from successful calls
//! - Read-only views (`total_supply`, `balance_of`)
//!
//! # Quick Start
//!
//! ```rust
//! use gnr_contract::{CallContext, MintAction, NftRegistry};
//! use gnr_types::{Address, TokenId, TokenInfo};
//!
//! let admin = Address::named("admin");
//! let mut registry = NftRegistry::new(admin.clone());
//! let ctx = CallContext::new(admin.clone());
//!
//! registry.add_whitelist(&ctx, vec![admin.clone()]).unwrap();
//! let events = registry
//!     .mint(
//!         &ctx,
//!         vec![MintAction {
//!             to: admin.clone(),
//!             token_info: TokenInfo::new(),
//!         }],
//!     )
//!     .unwrap();
//! assert_eq!(events.len(), 1);
//! assert_eq!(registry.total_supply(TokenId::ZERO).unwrap(), 1);
//! ```

pub mod calls;
pub mod contract;
pub mod error;
pub mod events;
pub mod storage;
pub mod views;

pub use calls::{BurnAction, CallContext, MintAction, TransferBatch, TransferTx};
pub use contract::NftRegistry;
pub use error::ContractError;
pub use events::Event;
pub use storage::ContractStorage;


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use gnr_types::{Address, TokenId, TokenInfo};

    /// A simplified operation for property runs. Errors are expected and
    /// ignored; the properties are about what survives them.
    #[derive(Clone, Debug)]
    enum Op {
        Mint { minter: u8, recipient: u8, count: u8 },
        Burn { sender: u8, token: u64 },
        Transfer { sender: u8, to: u8, token: u64 },
        Pause(bool),
    }

    fn actor(i: u8) -> Address {
        Address::named(format!("actor-{}", i % 3))
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..3, 0u8..3, 1u8..4)
                .prop_map(|(minter, recipient, count)| Op::Mint { minter, recipient, count }),
            (0u8..3, 0u64..12).prop_map(|(sender, token)| Op::Burn { sender, token }),
            (0u8..3, 0u8..3, 0u64..12)
                .prop_map(|(sender, to, token)| Op::Transfer { sender, to, token }),
            any::<bool>().prop_map(Op::Pause),
        ]
    }

    proptest! {
        /// After any operation sequence: ledger and metadata key sets stay
        /// identical, the allocation counter never moves backwards, and a
        /// successful mint of n tokens advances it by exactly n.
        #[test]
        fn invariants_survive_arbitrary_operation_sequences(
            ops in proptest::collection::vec(op_strategy(), 1..40)
        ) {
            let admin = Address::named("prop-admin");
            let mut registry = NftRegistry::new(admin.clone());
            let admin_ctx = CallContext::new(admin.clone());
            registry
                .add_whitelist(&admin_ctx, (0..3).map(actor).collect())
                .unwrap();

            for op in ops {
                let counter_before = registry.storage().next_token_id;
                match op {
                    Op::Mint { minter, recipient, count } => {
                        let batch: Vec<MintAction> = (0..count)
                            .map(|_| MintAction {
                                to: actor(recipient),
                                token_info: TokenInfo::new(),
                            })
                            .collect();
                        let n = batch.len() as u64;
                        let result =
                            registry.mint(&CallContext::new(actor(minter)), batch);
                        if result.is_ok() {
                            prop_assert_eq!(
                                registry.storage().next_token_id,
                                TokenId::new(counter_before.get() + n)
                            );
                        }
                    }
                    Op::Burn { sender, token } => {
                        let from = actor(sender);
                        let _ = registry.burn(
                            &CallContext::new(from.clone()),
                            vec![BurnAction {
                                from,
                                token_id: TokenId::new(token),
                                amount: 1,
                            }],
                        );
                    }
                    Op::Transfer { sender, to, token } => {
                        let from = actor(sender);
                        let _ = registry.transfer(
                            &CallContext::new(from.clone()),
                            vec![TransferBatch {
                                from,
                                txs: vec![TransferTx {
                                    to: actor(to),
                                    token_id: TokenId::new(token),
                                    amount: 1,
                                }],
                            }],
                        );
                    }
                    Op::Pause(paused) => {
                        registry.set_pause(&admin_ctx, paused).unwrap();
                    }
                }
                prop_assert!(registry.storage().invariants_hold());
                prop_assert!(registry.storage().next_token_id >= counter_before);
            }
        }

        /// total_supply is 1 for every present id and TokenUndefined for
        /// every absent id in range.
        #[test]
        fn total_supply_partitions_ids(mint_count in 1u64..8, burn_mask in 0u64..256) {
            let admin = Address::named("prop-admin");
            let mut registry = NftRegistry::new(admin.clone());
            let admin_ctx = CallContext::new(admin.clone());
            registry.add_whitelist(&admin_ctx, vec![admin.clone()]).unwrap();

            let batch: Vec<MintAction> = (0..mint_count)
                .map(|_| MintAction { to: admin.clone(), token_info: TokenInfo::new() })
                .collect();
            registry.mint(&admin_ctx, batch).unwrap();

            for id in 0..mint_count {
                if burn_mask & (1 << id) != 0 {
                    registry
                        .burn(
                            &admin_ctx,
                            vec![BurnAction {
                                from: admin.clone(),
                                token_id: TokenId::new(id),
                                amount: 1,
                            }],
                        )
                        .unwrap();
                }
            }

            for id in 0..mint_count + 2 {
                let token_id = TokenId::new(id);
                let burned = id >= mint_count || burn_mask & (1 << id) != 0;
                if burned {
                    prop_assert_eq!(
                        registry.total_supply(token_id),
                        Err(ContractError::TokenUndefined(token_id))
                    );
                } else {
                    prop_assert_eq!(registry.total_supply(token_id).unwrap(), 1);
                }
            }
        }
    }
}
