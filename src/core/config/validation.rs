use super::FieldDefaults;
use crate::Result;
use anyhow::anyhow;

pub struct DefaultsValidator;

impl DefaultsValidator {
    /// Every default must be usable as-is, so blank entries are rejected.
    pub fn validate(defaults: &FieldDefaults) -> Result<()> {
        let entries = [
            ("degree", &defaults.degree),
            ("school", &defaults.school),
            ("department", &defaults.department),
            ("program", &defaults.program),
            ("major", &defaults.major),
            ("license", &defaults.license),
            ("keywords", &defaults.keywords),
        ];

        for (field, value) in entries {
            if value.trim().is_empty() {
                return Err(anyhow!("default for '{}' cannot be empty", field));
            }
        }

        Ok(())
    }
}
