//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (config, journal, dream).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, arguments, or import file.
    pub const INVALID_INPUT: i32 = 4;

    /// The journal database could not be opened or written.
    pub const STORAGE: i32 = 5;
}

/// Fallback `DREAMLOG_LOG` filter.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `DREAMLOG_LOG` filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "dreamlog=debug,dreamlog_core=debug";
