use super::{DefaultsValidator, FieldDefaults};
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

pub struct DefaultsLoader;

impl DefaultsLoader {
    /// Resolve the defaults table: the given TOML file when provided, otherwise the built-ins.
    pub fn load(path: Option<&Path>) -> Result<FieldDefaults> {
        let defaults = match path {
            Some(path) => Self::load_from_file(path)?,
            None => FieldDefaults::default(),
        };

        DefaultsValidator::validate(&defaults)?;
        Ok(defaults)
    }

    /// Load defaults from a specific TOML file; keys it omits keep their built-in values.
    pub fn load_from_file(path: &Path) -> Result<FieldDefaults> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read defaults file {}", path.display()))?;

        let defaults: FieldDefaults = toml::from_str(&content)
            .with_context(|| format!("failed to parse defaults file {}", path.display()))?;

        tracing::debug!("loaded field defaults from {}", path.display());
        Ok(defaults)
    }
}
