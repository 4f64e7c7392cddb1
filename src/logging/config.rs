use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::anyhow;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "info";

/// Resolved logging configuration after applying CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub default_level: String,
    /// When set, `default_level` came from the command line and wins over `RUST_LOG`.
    pub level_from_cli: bool,
    pub console_output: ConsoleOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            level_from_cli: false,
            console_output: ConsoleOutput::default(),
        }
    }
}

impl LoggingConfig {
    /// Build the configuration from the relevant CLI flags; `quiet` beats `console_output`.
    pub fn from_args(
        quiet: bool,
        log_level: Option<&str>,
        console_output: Option<ConsoleOutput>,
    ) -> Self {
        let mut config = LoggingConfig::default();
        if let Some(level) = log_level {
            config.default_level = level.to_string();
            config.level_from_cli = true;
        }
        if let Some(output) = console_output {
            config.console_output = output;
        }
        if quiet {
            config.console_output = ConsoleOutput::None;
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        Directive::from_str(&self.default_level)
            .map_err(|_| anyhow!("log level '{}' is not a valid tracing directive", self.default_level))?;
        Ok(())
    }
}
