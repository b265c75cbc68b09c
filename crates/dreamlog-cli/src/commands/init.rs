use std::path::PathBuf;

use dreamlog_core::storage::SqliteDreamStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_journal_path, write_config, DreamlogConfig};
use crate::errors::CliError;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let target = match args.path.as_deref().or(ctx.cli().journal.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_journal_path()?,
    };
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create journal directory {}: {}", parent.display(), e)
        })?;
    }

    SqliteDreamStore::open(&target)?;
    let target = std::fs::canonicalize(&target)
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", target.display(), e))?;
    write_config(&config_path, &DreamlogConfig::new(&target))?;
    tracing::info!(journal = %target.display(), config = %config_path.display(), "initialized journal");

    if !ctx.quiet() {
        println!("Initialized dream journal at {}", target.display());
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
