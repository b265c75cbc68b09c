//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for JSON output.
//! `DREAMLOG_LOG` takes `EnvFilter` directives and overrides `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("DREAMLOG_LOG").unwrap_or_else(|_| fallback.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
