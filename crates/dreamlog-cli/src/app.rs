//! Application context for the Dreamlog CLI.
//!
//! Bundles the parsed CLI arguments with lazily loaded configuration and
//! resolves where the journal database lives.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use dreamlog_core::storage::{AsyncDreamStore, SqliteDreamStore};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, DreamlogConfig};
use crate::errors::CliError;

/// Application context that bundles CLI args with the config file.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<DreamlogConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Loaded on first use.
    pub fn config(&self) -> anyhow::Result<Option<&DreamlogConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path).map(Some)
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    /// Resolve the journal path from `--journal`/`DREAMLOG_PATH`, then config.
    pub fn journal_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.journal.as_deref() {
            return Ok(PathBuf::from(path));
        }
        match self.config()? {
            Some(config) => Ok(PathBuf::from(&config.journal.path)),
            None => {
                let config_path = resolve_config_path()?;
                Err(CliError::not_found(
                    missing_config_message(&config_path),
                    "Hint: Run `dreamlog init`, or pass --journal /path/to/dreams.sqlite3.",
                )
                .into())
            }
        }
    }

    /// Configured editor override, if any.
    pub fn editor(&self) -> anyhow::Result<Option<String>> {
        Ok(self.config()?.and_then(|config| config.ui.editor.clone()))
    }

    /// Configured export directory, if any.
    pub fn export_dir(&self) -> anyhow::Result<Option<PathBuf>> {
        Ok(self
            .config()?
            .and_then(|config| config.export.directory.as_deref())
            .map(PathBuf::from))
    }

    /// Open the journal store.
    ///
    /// Unlike `init`, this refuses to create a database that does not exist
    /// yet, so a mistyped path is reported instead of silently creating an
    /// empty journal.
    pub fn open_store(&self) -> anyhow::Result<AsyncDreamStore<SqliteDreamStore>> {
        let path = self.journal_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_journal_message(&path),
                "Hint: Run `dreamlog init` to create it.",
            )
            .into());
        }
        let store = SqliteDreamStore::open(&path)?;
        Ok(AsyncDreamStore::new(store))
    }
}

/// Resolve the config file path, checking DREAMLOG_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DREAMLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Error message when the journal database is missing.
pub fn missing_journal_message(path: &Path) -> String {
    format!("No journal found at {}", path.display())
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No journal configured (config not found at {})",
        config_path.display()
    )
}
