use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use dreamlog_core::VERSION;

/// Dreamlog - a local, CLI-first dream journal
#[derive(Parser)]
#[command(name = "dreamlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(short, long, global = true, env = "DREAMLOG_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Dream title
    #[arg(long)]
    pub title: String,

    /// Dream date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Dream content (overrides stdin/editor)
    #[arg(long)]
    pub content: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Dream ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Dream ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New content
    #[arg(long)]
    pub content: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Dream ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Directory to write the export file into
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long, conflicts_with = "dir")]
    pub stdout: bool,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Export file to import
    #[arg(value_name = "FILE")]
    pub file: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the journal database and config
    Init(InitArgs),

    /// Record a new dream
    Add(AddArgs),

    /// List dreams, newest first
    List(ListArgs),

    /// Show a dream by ID
    Show(ShowArgs),

    /// Edit a dream in place
    Edit(EditArgs),

    /// Delete a dream by ID
    Delete(DeleteArgs),

    /// Export all dreams to a dated JSON file
    Export(ExportArgs),

    /// Import dreams from an export file (merges by ID)
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
