use serde::Deserialize;

/// Fallback values for the optional metadata fields.
///
/// Built once at startup, either from the built-in table or from a
/// `--defaults` TOML file whose missing keys fall back to the built-ins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDefaults {
    #[serde(default = "default_degree")]
    pub degree: String,

    #[serde(default = "default_school")]
    pub school: String,

    #[serde(default = "default_department")]
    pub department: String,

    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_major")]
    pub major: String,

    #[serde(default = "default_license")]
    pub license: String,

    /// Keyword emitted when the document has no keywords
    #[serde(default = "default_keywords")]
    pub keywords: String,
}

fn default_degree() -> String {
    "MSc".to_string()
}

fn default_school() -> String {
    "School of Electrical Engineering".to_string()
}

fn default_department() -> String {
    "Department of Communications and Networking".to_string()
}

fn default_program() -> String {
    "Master's Programme in Electrical Engineering".to_string()
}

fn default_major() -> String {
    "Communications and Networking".to_string()
}

fn default_license() -> String {
    "CC BY-NC-SA 4.0".to_string()
}

fn default_keywords() -> String {
    "thesis".to_string()
}

impl Default for FieldDefaults {
    fn default() -> Self {
        FieldDefaults {
            degree: default_degree(),
            school: default_school(),
            department: default_department(),
            program: default_program(),
            major: default_major(),
            license: default_license(),
            keywords: default_keywords(),
        }
    }
}

impl FieldDefaults {
    /// Look up the default for an optional field by its metadata key.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        match field {
            "degree" => Some(&self.degree),
            "school" => Some(&self.school),
            "department" => Some(&self.department),
            "program" => Some(&self.program),
            "major" => Some(&self.major),
            "license" => Some(&self.license),
            "keywords" => Some(&self.keywords),
            _ => None,
        }
    }
}

pub mod loader;
pub mod validation;

pub use loader::DefaultsLoader;
pub use validation::DefaultsValidator;
