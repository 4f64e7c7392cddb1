pub mod config;
pub mod layers;

pub use layers::console::ConsoleOutput;

use crate::logging::config::LoggingConfig;
use crate::logging::layers::console;
use crate::Result;
use anyhow::{anyhow, Context};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Handle returned by [`init`]; keeps the chosen sink visible to callers.
pub struct LoggingGuard {
    console_output: ConsoleOutput,
}

impl LoggingGuard {
    /// Returns the console output configuration used during initialization.
    pub fn console_output(&self) -> ConsoleOutput {
        self.console_output
    }
}

/// Initialize the global tracing subscriber.
///
/// The level comes from the command line when given, then `RUST_LOG`, then the
/// configured default. Errors when invoked more than once per process.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard> {
    config.validate()?;

    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let env_filter = if config.level_from_cli {
        EnvFilter::try_new(&config.default_level)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.default_level))
    }
    .context("failed to configure tracing level")?;

    tracing_subscriber::registry()
        .with(console::console_layer(config.console_output))
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LoggingGuard {
        console_output: config.console_output,
    })
}

#[cfg(test)]
/// Reset the initialization guard so tests can exercise `init` more than once.
pub fn reset_for_tests() {
    LOGGER_INITIALIZED.store(false, Ordering::SeqCst);
}
