use std::collections::{BTreeMap, BTreeSet};

use gnr_gate::{
    require_admin, require_exact_price, require_whitelisted, PauseTransfer, TransferCheck,
    TransferPolicy,
};
use gnr_types::{Address, Mutez, TokenId, TokenMetadata};

use crate::calls::{BurnAction, CallContext, MintAction, TransferBatch};
use crate::error::ContractError;
use crate::events::Event;
use crate::storage::ContractStorage;

/// The registry state machine.
///
/// Each entry operation is atomic: every precondition for the call is
/// checked against the current storage (plus staged writes from earlier
/// items of the same batch) before a single mutation is applied. A call
/// that returns `Err` leaves the storage untouched, so the execution
/// environment's whole-call rollback is reproduced exactly.
///
/// Mutating operations return the events they emitted; forwarding those to
/// a sink is the dispatcher's job.
pub struct NftRegistry {
    storage: ContractStorage,
    policy: Box<dyn TransferPolicy>,
}

impl NftRegistry {
    /// Fresh registry with the reference pause policy.
    pub fn new(administrator: Address) -> Self {
        Self::from_storage(ContractStorage::new(administrator))
    }

    /// Wrap existing storage with the reference pause policy.
    pub fn from_storage(storage: ContractStorage) -> Self {
        Self::with_policy(storage, Box::new(PauseTransfer))
    }

    /// Wrap existing storage with a custom transfer policy.
    pub fn with_policy(storage: ContractStorage, policy: Box<dyn TransferPolicy>) -> Self {
        tracing::debug!(policy = policy.name(), "registry configured");
        Self { storage, policy }
    }

    /// Read-only view of the durable storage.
    pub fn storage(&self) -> &ContractStorage {
        &self.storage
    }

    /// Take the storage back out (for persistence).
    pub fn into_storage(self) -> ContractStorage {
        self.storage
    }

    /// The active transfer policy.
    pub fn policy(&self) -> &dyn TransferPolicy {
        self.policy.as_ref()
    }

    // -----------------------------------------------------------------------
    // Admin-gated entrypoints
    // -----------------------------------------------------------------------

    /// Add addresses to the mint whitelist. Admin only. The whole call
    /// fails if any address, including an earlier element of the same
    /// batch, is already whitelisted.
    pub fn add_whitelist(
        &mut self,
        ctx: &CallContext,
        addresses: Vec<Address>,
    ) -> Result<Vec<Event>, ContractError> {
        require_admin(&self.storage.administrator, &ctx.sender)?;

        let mut staged = BTreeSet::new();
        for address in &addresses {
            if self.storage.whitelist.contains(address) || !staged.insert(address.clone()) {
                return Err(ContractError::AlreadyWhitelisted(address.clone()));
            }
        }

        let mut events = Vec::with_capacity(addresses.len());
        for address in addresses {
            self.storage.whitelist.insert(address.clone());
            events.push(Event::WhitelistAdded { address });
        }
        tracing::debug!(added = events.len(), "whitelist extended");
        Ok(events)
    }

    /// Overwrite the unit price. Admin only, no upper bound.
    pub fn set_token_price(
        &mut self,
        ctx: &CallContext,
        price: Mutez,
    ) -> Result<Vec<Event>, ContractError> {
        require_admin(&self.storage.administrator, &ctx.sender)?;
        self.storage.token_price = price;
        Ok(vec![Event::PriceSet { price }])
    }

    /// Flip the pause switch. Admin only.
    pub fn set_pause(
        &mut self,
        ctx: &CallContext,
        paused: bool,
    ) -> Result<Vec<Event>, ContractError> {
        require_admin(&self.storage.administrator, &ctx.sender)?;
        self.storage.paused = paused;
        tracing::info!(paused, "pause switch set");
        Ok(vec![Event::PauseSet { paused }])
    }

    /// Hand the administrator role to another address. Admin only.
    pub fn set_administrator(
        &mut self,
        ctx: &CallContext,
        new_admin: Address,
    ) -> Result<Vec<Event>, ContractError> {
        require_admin(&self.storage.administrator, &ctx.sender)?;
        self.storage.administrator = new_admin.clone();
        Ok(vec![Event::AdminChanged { new_admin }])
    }

    /// Release collected mutez to the administrator. Admin only; the
    /// actual payout transfer is the environment's job.
    pub fn withdraw(
        &mut self,
        ctx: &CallContext,
        amount: Mutez,
    ) -> Result<Vec<Event>, ContractError> {
        require_admin(&self.storage.administrator, &ctx.sender)?;
        if amount > self.storage.balance {
            return Err(ContractError::InsufficientFunds {
                requested: amount,
                available: self.storage.balance,
            });
        }
        self.storage.balance = self.storage.balance.checked_sub(amount)?;
        Ok(vec![Event::Withdrawal { amount }])
    }

    // -----------------------------------------------------------------------
    // Mint
    // -----------------------------------------------------------------------

    /// Create tokens. The attached amount must equal the unit price exactly
    /// (checked first, once per call) and the *sender* must be whitelisted;
    /// recipients are unconstrained. Ids are allocated sequentially from
    /// `next_token_id` and never reused.
    pub fn mint(
        &mut self,
        ctx: &CallContext,
        batch: Vec<MintAction>,
    ) -> Result<Vec<Event>, ContractError> {
        // Reference ordering: price gate before whitelist gate.
        require_exact_price(self.storage.token_price, ctx.amount)?;
        require_whitelisted(&self.storage.whitelist, &ctx.sender)?;
        let new_balance = self.storage.balance.checked_add(ctx.amount)?;

        let mut events = Vec::with_capacity(batch.len());
        for action in batch {
            let token_id = self.storage.next_token_id;
            self.storage
                .token_metadata
                .insert(token_id, TokenMetadata::new(token_id, action.token_info));
            self.storage.ledger.insert(token_id, action.to.clone());
            self.storage.next_token_id = token_id.next();
            events.push(Event::Minted {
                token_id,
                to: action.to,
            });
        }
        self.storage.balance = new_balance;
        tracing::debug!(
            minted = events.len(),
            next = %self.storage.next_token_id,
            "mint committed"
        );
        Ok(events)
    }

    // -----------------------------------------------------------------------
    // Burn
    // -----------------------------------------------------------------------

    /// Destroy tokens. Gated by the transfer policy; each element runs the
    /// permission check in the self-transfer shape `(from, from, token_id)`.
    /// An element with `amount` 0 is a no-op but still has its existence
    /// and permission checked. A token and its metadata are always removed
    /// together.
    pub fn burn(
        &mut self,
        ctx: &CallContext,
        batch: Vec<BurnAction>,
    ) -> Result<Vec<Event>, ContractError> {
        self.policy.require_supported(self.storage.paused)?;

        // Validation pass: no storage writes. Earlier elements' staged
        // removals are visible to later ones, so burning the same id twice
        // in one batch fails TokenUndefined like sequential execution would.
        let mut staged_removals: BTreeSet<TokenId> = BTreeSet::new();
        let mut events = Vec::new();
        for action in &batch {
            if staged_removals.contains(&action.token_id)
                || !self.storage.is_defined(action.token_id)
            {
                return Err(ContractError::TokenUndefined(action.token_id));
            }
            self.policy.check_transfer(
                self.storage.paused,
                &TransferCheck {
                    sender: &ctx.sender,
                    from: &action.from,
                    to: &action.from,
                    token_id: action.token_id,
                },
            )?;
            if action.amount > 0 {
                let owner = self.storage.owner_of(action.token_id);
                if action.amount != 1 || owner != Some(&action.from) {
                    return Err(ContractError::InsufficientBalance {
                        token_id: action.token_id,
                    });
                }
                staged_removals.insert(action.token_id);
                events.push(Event::Burned {
                    token_id: action.token_id,
                    from: action.from.clone(),
                });
            }
        }

        // Commit pass: joint removal from both maps.
        for token_id in &staged_removals {
            self.storage.ledger.remove(token_id);
            self.storage.token_metadata.remove(token_id);
        }
        tracing::debug!(burned = staged_removals.len(), "burn committed");
        Ok(events)
    }

    // -----------------------------------------------------------------------
    // Transfer
    // -----------------------------------------------------------------------

    /// Move tokens between owners. Gated by the transfer policy per tx with
    /// `(sender, from, to, token_id)`. A tx with `amount` 0 is a no-op but
    /// still has its existence and permission checked. The whole call
    /// applies or none of it does.
    pub fn transfer(
        &mut self,
        ctx: &CallContext,
        batch: Vec<TransferBatch>,
    ) -> Result<Vec<Event>, ContractError> {
        self.policy.require_supported(self.storage.paused)?;

        // Validation pass over an ownership overlay: moves staged by
        // earlier txs are visible to later ones, matching sequential
        // execution of the batch.
        let mut staged_owners: BTreeMap<TokenId, Address> = BTreeMap::new();
        let mut events = Vec::new();
        for group in &batch {
            for tx in &group.txs {
                if !self.storage.is_defined(tx.token_id) {
                    return Err(ContractError::TokenUndefined(tx.token_id));
                }
                self.policy.check_transfer(
                    self.storage.paused,
                    &TransferCheck {
                        sender: &ctx.sender,
                        from: &group.from,
                        to: &tx.to,
                        token_id: tx.token_id,
                    },
                )?;
                if tx.amount > 0 {
                    let owner = staged_owners
                        .get(&tx.token_id)
                        .or_else(|| self.storage.owner_of(tx.token_id));
                    if tx.amount != 1 || owner != Some(&group.from) {
                        return Err(ContractError::InsufficientBalance {
                            token_id: tx.token_id,
                        });
                    }
                    staged_owners.insert(tx.token_id, tx.to.clone());
                    events.push(Event::Transferred {
                        token_id: tx.token_id,
                        from: group.from.clone(),
                        to: tx.to.clone(),
                    });
                }
            }
        }

        // Commit pass: final owner per moved token.
        for (token_id, owner) in staged_owners {
            self.storage.ledger.insert(token_id, owner);
        }
        tracing::debug!(moved = events.len(), "transfer committed");
        Ok(events)
    }
}
