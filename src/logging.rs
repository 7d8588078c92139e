//! Logging setup for the promptline binary.
//!
//! Logs go to stderr through a `tracing` fmt subscriber so stdout stays free
//! for command output. `PROMPTLINE_LOG` takes an `EnvFilter` directive
//! (e.g. `info` or `promptline=debug`); without it the level is `warn`, or
//! `debug` when debug output is requested.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter directive override.
pub const LOG_ENV: &str = "PROMPTLINE_LOG";

/// Enables debug tracing of option resolution.
pub const DEBUG_ENV: &str = "PROMPTLINE_DEBUG";

/// Whether `PROMPTLINE_DEBUG` asks for debug output.
pub fn debug_requested() -> bool {
    std::env::var(DEBUG_ENV).is_ok_and(|value| is_enabled(&value))
}

/// Anything but empty, `0`, `false`, `off` or `no` turns a switch on.
fn is_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off" | "no"
    )
}

/// Default filter directive for the given debug setting.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

/// Install the global stderr subscriber.
pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
