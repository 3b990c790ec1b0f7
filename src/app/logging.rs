//! Diagnostic logging to stderr.
//!
//! Stdout carries command results that pipeline steps parse, so log records
//! never go there.

use env_logger::{Builder, Env, Target};

use crate::app::config::LOG_ENV;

/// Initialise the global logger. Level defaults to `warn`; `CIELO_LOG` takes
/// precedence over `RUST_LOG`.
pub fn init() {
    let filter = std::env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty());
    let env = Env::default().default_filter_or("warn");

    let mut builder = Builder::from_env(env);
    if let Some(filter) = filter {
        builder.parse_filters(&filter);
    }
    builder.target(Target::Stderr).format_timestamp(None);

    // A second initialisation (tests driving `cli::run`) is harmless.
    let _ = builder.try_init();
}
