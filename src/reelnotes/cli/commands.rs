//! # CLI Layer
//!
//! One possible UI client for reelnotes. This is the only place that knows
//! about argument parsing, stdout/stderr and exit codes. Handlers call the
//! [`ReviewManager`](reelnotes::manager::ReviewManager) and print what it
//! returns; they hold no review logic of their own.

use super::render::{print_messages, print_review_list};
use super::setup::{Cli, Commands};
use super::shell::run_shell;
use clap::Parser;
use colored::Colorize;
use reelnotes::config::{ConfigKey, ReelConfig};
use reelnotes::error::Result;
use reelnotes::init::{initialize, resolve_data_dir, ReelContext, HOME_ENV};
use reelnotes::logging::{init_logging, Verbosity};
use reelnotes::model::ReviewId;
use reelnotes::store::fs::FileStore;
use reelnotes::store::SlotStore;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flag(cli.verbose));

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let env_home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), env_home)?;

    // Config and Path never load (and so never seed) the review list
    match cli.command.unwrap_or(Commands::List) {
        Commands::Config { key, value } => handle_config(&data_dir, key, value),
        Commands::Path => handle_path(&data_dir),
        Commands::List => handle_list(&load_context(data_dir)),
        Commands::Add { title, review } => {
            handle_add(&mut load_context(data_dir), &title, &review)
        }
        Commands::Edit { id, title, review } => handle_edit(
            &mut load_context(data_dir),
            id,
            title.as_deref(),
            review.as_deref(),
        ),
        Commands::Delete { ids } => handle_delete(&mut load_context(data_dir), &ids),
        Commands::Shell => handle_shell(&mut load_context(data_dir)),
    }
}

/// Load the review list, printing whatever loading had to say (seeding,
/// unreadable data, duplicate ids).
fn load_context(data_dir: PathBuf) -> ReelContext {
    let ctx = initialize(data_dir);
    print_messages(&ctx.load_result.messages);
    ctx
}

fn handle_list(ctx: &ReelContext) -> Result<()> {
    let result = ctx.manager.list();
    print_review_list(&result.listed_reviews);
    Ok(())
}

fn handle_add(ctx: &mut ReelContext, title: &str, review: &str) -> Result<()> {
    let result = ctx.manager.add(title, review);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut ReelContext,
    id: ReviewId,
    title: Option<&str>,
    review: Option<&str>,
) -> Result<()> {
    let result = ctx.manager.edit(id, title, review);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut ReelContext, ids: &[ReviewId]) -> Result<()> {
    for &id in ids {
        let result = ctx.manager.delete(id);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_shell(ctx: &mut ReelContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_shell(&mut ctx.manager, stdin.lock(), &mut stdout)
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = ReelConfig::load(data_dir)?;

    match (key, value) {
        (None, _) => {
            for key in ConfigKey::ALL {
                println!("{} = {}", key.name(), config.get(key));
            }
        }
        (Some(key), None) => {
            let key = ConfigKey::parse(&key)?;
            println!("{}", config.get(key));
        }
        (Some(key), Some(value)) => {
            let key = ConfigKey::parse(&key)?;
            config.set(key, &value)?;
            config.save(data_dir)?;
            println!(
                "{}",
                format!("{} set to {}", key.name(), config.get(key)).green()
            );
        }
    }
    Ok(())
}

fn handle_path(data_dir: &Path) -> Result<()> {
    let config = ReelConfig::load(data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.to_path_buf());
    println!("{}", store.slot_path(&config.storage_key)?.display());
    Ok(())
}
