use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use gnr_contract::{
    BurnAction, CallContext, ContractStorage, Event, MintAction, NftRegistry, TransferBatch,
    TransferTx,
};
use gnr_types::{Address, Mutez, TokenId, TokenInfo};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => cmd_init(&cli.store, args),
        Command::Price(args) => {
            let ctx = CallContext::new(parse_address(&args.sender)?);
            dispatch(&cli.store, |registry| {
                registry.set_token_price(&ctx, Mutez::new(args.price))
            })
        }
        Command::Whitelist(args) => {
            let ctx = CallContext::new(parse_address(&args.sender)?);
            let addresses = args
                .addresses
                .iter()
                .map(|a| parse_address(a))
                .collect::<anyhow::Result<Vec<_>>>()?;
            dispatch(&cli.store, |registry| {
                registry.add_whitelist(&ctx, addresses)
            })
        }
        Command::Pause(args) => {
            let ctx = CallContext::new(parse_address(&args.sender)?);
            dispatch(&cli.store, |registry| registry.set_pause(&ctx, args.paused))
        }
        Command::Admin(args) => {
            let ctx = CallContext::new(parse_address(&args.sender)?);
            let new_admin = parse_address(&args.new_admin)?;
            dispatch(&cli.store, |registry| {
                registry.set_administrator(&ctx, new_admin)
            })
        }
        Command::Withdraw(args) => {
            let ctx = CallContext::new(parse_address(&args.sender)?);
            dispatch(&cli.store, |registry| {
                registry.withdraw(&ctx, Mutez::new(args.amount))
            })
        }
        Command::Mint(args) => {
            let ctx =
                CallContext::with_amount(parse_address(&args.sender)?, Mutez::new(args.amount));
            let batch = args
                .to
                .iter()
                .map(|to| {
                    Ok(MintAction {
                        to: parse_address(to)?,
                        token_info: match &args.uri {
                            Some(uri) => {
                                TokenInfo::from([(String::new(), uri.as_bytes().to_vec())])
                            }
                            None => TokenInfo::new(),
                        },
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            dispatch(&cli.store, |registry| registry.mint(&ctx, batch))
        }
        Command::Burn(args) => {
            let sender = parse_address(&args.sender)?;
            let from = match &args.from {
                Some(from) => parse_address(from)?,
                None => sender.clone(),
            };
            let ctx = CallContext::new(sender);
            dispatch(&cli.store, |registry| {
                registry.burn(
                    &ctx,
                    vec![BurnAction {
                        from,
                        token_id: TokenId::new(args.token_id),
                        amount: args.amount,
                    }],
                )
            })
        }
        Command::Transfer(args) => {
            let sender = parse_address(&args.sender)?;
            let from = match &args.from {
                Some(from) => parse_address(from)?,
                None => sender.clone(),
            };
            let to = parse_address(&args.to)?;
            let ctx = CallContext::new(sender);
            dispatch(&cli.store, |registry| {
                registry.transfer(
                    &ctx,
                    vec![TransferBatch {
                        from,
                        txs: vec![TransferTx {
                            to,
                            token_id: TokenId::new(args.token_id),
                            amount: args.amount,
                        }],
                    }],
                )
            })
        }
        Command::Supply(args) => {
            let registry = NftRegistry::from_storage(load_storage(&cli.store)?);
            let supply = registry.total_supply(TokenId::new(args.token_id))?;
            println!("{} supply {}", TokenId::new(args.token_id), supply.to_string().bold());
            Ok(())
        }
        Command::Balance(args) => {
            let registry = NftRegistry::from_storage(load_storage(&cli.store)?);
            let owner = parse_address(&args.owner)?;
            let balance = registry.balance_of(&owner, TokenId::new(args.token_id))?;
            println!(
                "{} holds {} of {}",
                owner.to_string().cyan(),
                balance.to_string().bold(),
                TokenId::new(args.token_id)
            );
            Ok(())
        }
        Command::Show => cmd_show(&cli.store),
    }
}

/// Resolve an identity argument: 40-hex-char address (optional `tz:`
/// prefix) or a name deriving a deterministic harness address.
fn parse_address(input: &str) -> anyhow::Result<Address> {
    match Address::from_hex(input) {
        Ok(addr) => Ok(addr),
        Err(_) => Ok(Address::named(input)),
    }
}

fn load_storage(store: &str) -> anyhow::Result<ContractStorage> {
    let raw = fs::read_to_string(store)
        .with_context(|| format!("no contract storage at {store} (run `gnr init` first)"))?;
    let storage: ContractStorage =
        serde_json::from_str(&raw).with_context(|| format!("corrupt contract storage {store}"))?;
    Ok(storage)
}

fn save_storage(store: &str, storage: &ContractStorage) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(store).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(store, serde_json::to_string_pretty(storage)?)?;
    Ok(())
}

/// One atomic call: load storage, run the operation, persist only on
/// success, print the emitted events. A failed call leaves the file as it
/// was, reproducing the environment's whole-call rollback.
fn dispatch<F>(store: &str, op: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut NftRegistry) -> Result<Vec<Event>, gnr_contract::ContractError>,
{
    let mut registry = NftRegistry::from_storage(load_storage(store)?);
    match op(&mut registry) {
        Ok(events) => {
            save_storage(store, registry.storage())?;
            println!("{} call accepted", "✓".green().bold());
            for event in &events {
                println!("  {} {}", event.kind().yellow(), event);
            }
            Ok(())
        }
        Err(err) => {
            println!("{} call rejected: {}", "✗".red().bold(), err);
            Err(err.into())
        }
    }
}

fn cmd_init(store: &str, args: InitArgs) -> anyhow::Result<()> {
    if Path::new(store).exists() && !args.force {
        bail!("storage {store} already exists (use --force to overwrite)");
    }
    let admin = parse_address(&args.admin)?;
    let storage = ContractStorage::new(admin.clone());
    save_storage(store, &storage)?;
    println!(
        "{} initialized registry in {}",
        "✓".green().bold(),
        store.bold()
    );
    println!("  administrator: {}", admin.to_string().cyan());
    Ok(())
}

fn cmd_show(store: &str) -> anyhow::Result<()> {
    let storage = load_storage(store)?;
    println!("administrator: {}", storage.administrator.to_string().cyan());
    println!("price: {}", storage.token_price.to_string().yellow());
    println!(
        "paused: {}",
        if storage.paused {
            "yes".red().to_string()
        } else {
            "no".green().to_string()
        }
    );
    println!("collected: {}", storage.balance.to_string().yellow());
    println!("next token id: {}", storage.next_token_id.get());
    println!("whitelist ({}):", storage.whitelist.len());
    for address in &storage.whitelist {
        println!("  {}", address.to_string().cyan());
    }
    println!("tokens ({}):", storage.token_count());
    for (token_id, owner) in &storage.ledger {
        println!("  {} → {}", token_id, owner.to_string().cyan());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address_accepts_hex_and_names() {
        let alice = Address::named("alice");
        assert_eq!(parse_address(&alice.to_hex()).unwrap(), alice);
        assert_eq!(
            parse_address(&format!("tz:{}", alice.to_hex())).unwrap(),
            alice
        );
        assert_eq!(parse_address("alice").unwrap(), alice);
    }
}
