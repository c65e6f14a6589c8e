use clap::{Args, Parser, Subcommand};

/// The harness plays the execution environment: every invocation is one
/// atomic entry call with an explicit sender (and attached amount for
/// mint), against a registry persisted as a JSON storage file.
#[derive(Parser)]
#[command(
    name = "gnr",
    about = "Gated NFT Registry — local contract harness",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the persisted contract storage.
    #[arg(long, global = true, default_value = ".gnr/storage.json")]
    pub store: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create fresh contract storage with the given administrator
    Init(InitArgs),
    /// Set the unit price (admin only)
    Price(PriceArgs),
    /// Add addresses to the mint whitelist (admin only)
    Whitelist(WhitelistArgs),
    /// Flip the pause switch (admin only)
    Pause(PauseArgs),
    /// Hand the administrator role to another address (admin only)
    Admin(AdminArgs),
    /// Release collected mutez (admin only)
    Withdraw(WithdrawArgs),
    /// Mint tokens (whitelisted senders, attached amount must equal price)
    Mint(MintArgs),
    /// Burn a token
    Burn(BurnArgs),
    /// Transfer a token
    Transfer(TransferArgs),
    /// Query the total supply of a token id
    Supply(SupplyArgs),
    /// Query an owner's balance for a token id
    Balance(BalanceArgs),
    /// Print the current storage
    Show,
}

// Identity arguments accept either a 40-hex-char address (optional `tz:`
// prefix) or a name, which derives a deterministic harness address.

#[derive(Args)]
pub struct InitArgs {
    /// The administrator identity.
    pub admin: String,
    /// Overwrite existing storage.
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct PriceArgs {
    /// New unit price in mutez.
    pub price: u64,
    #[arg(short, long)]
    pub sender: String,
}

#[derive(Args)]
pub struct WhitelistArgs {
    /// Addresses to whitelist, in order.
    #[arg(required = true)]
    pub addresses: Vec<String>,
    #[arg(short, long)]
    pub sender: String,
}

#[derive(Args)]
pub struct PauseArgs {
    /// `true` to pause, `false` to resume.
    pub paused: bool,
    #[arg(short, long)]
    pub sender: String,
}

#[derive(Args)]
pub struct AdminArgs {
    /// The new administrator identity.
    pub new_admin: String,
    #[arg(short, long)]
    pub sender: String,
}

#[derive(Args)]
pub struct WithdrawArgs {
    /// Amount to release, in mutez.
    pub amount: u64,
    #[arg(short, long)]
    pub sender: String,
}

#[derive(Args)]
pub struct MintArgs {
    /// Recipients, one token each, in order.
    #[arg(required = true)]
    pub to: Vec<String>,
    #[arg(short, long)]
    pub sender: String,
    /// Mutez attached to the call (must equal the unit price).
    #[arg(short, long, default_value_t = 0)]
    pub amount: u64,
    /// Metadata URI stored under the empty key, per token.
    #[arg(long)]
    pub uri: Option<String>,
}

#[derive(Args)]
pub struct BurnArgs {
    pub token_id: u64,
    #[arg(short, long)]
    pub sender: String,
    /// Declared source owner; defaults to the sender.
    #[arg(long)]
    pub from: Option<String>,
    /// Quantity (0 is a checked no-op, otherwise must be 1).
    #[arg(long, default_value_t = 1)]
    pub amount: u64,
}

#[derive(Args)]
pub struct TransferArgs {
    pub token_id: u64,
    /// Recipient identity.
    #[arg(long)]
    pub to: String,
    #[arg(short, long)]
    pub sender: String,
    /// Declared source owner; defaults to the sender.
    #[arg(long)]
    pub from: Option<String>,
    /// Quantity (0 is a checked no-op, otherwise must be 1).
    #[arg(long, default_value_t = 1)]
    pub amount: u64,
}

#[derive(Args)]
pub struct SupplyArgs {
    pub token_id: u64,
}

#[derive(Args)]
pub struct BalanceArgs {
    pub owner: String,
    pub token_id: u64,
}
