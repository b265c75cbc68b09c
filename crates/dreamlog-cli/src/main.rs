//! Dreamlog CLI - a local, CLI-first dream journal
//!
//! Command-line front end over `dreamlog-core`: records dreams, lists and
//! edits them, and moves the whole journal in and out of JSON exports.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, misc, transfer};
use crate::errors::{exit_code_for, hint_for};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli).await {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        if let Some(hint) = hint_for(&e) {
            eprintln!("{}", hint);
        }
        std::process::exit(exit_code_for(&e));
    }
}

async fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Add(args)) => entries::handle_add(ctx, args).await?,
        Some(Commands::List(args)) => entries::handle_list(ctx, args).await?,
        Some(Commands::Show(args)) => entries::handle_show(ctx, args).await?,
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args).await?,
        Some(Commands::Delete(args)) => entries::handle_delete(ctx, args).await?,
        Some(Commands::Export(args)) => transfer::handle_export(ctx, args).await?,
        Some(Commands::Import(args)) => transfer::handle_import(ctx, args).await?,
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}
