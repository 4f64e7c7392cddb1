use crate::core::config::FieldDefaults;
use crate::core::error::MetadataError;
use indexmap::IndexMap;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess};
use serde_yaml::Value;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Fields that must be present (and non-null), in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["title", "author", "supervisor", "advisor", "date"];

/// Optional fields that fall back to a [`FieldDefaults`] entry.
pub const OPTIONAL_FIELDS: [&str; 8] = [
    "degree",
    "school",
    "department",
    "program",
    "major",
    "license",
    "keywords",
    "abstract",
];

fn is_known_field(field: &str) -> bool {
    REQUIRED_FIELDS.contains(&field) || OPTIONAL_FIELDS.contains(&field)
}

/// Metadata fields as they appear in the source file, in source order.
///
/// Values are the scalar text exactly as written (`2024.10` stays `2024.10`);
/// `None` marks an explicit null.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    path: PathBuf,
    fields: IndexMap<String, Option<String>>,
}

impl MetadataDocument {
    /// Read and parse a metadata YAML file.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let text = fs::read_to_string(path).map_err(|err| MetadataError::read(path, err))?;
        let document = Self::parse(&text, path)?;
        tracing::debug!(
            "loaded {} metadata fields from {}",
            document.fields.len(),
            path.display()
        );
        Ok(document)
    }

    /// Parse YAML text; `path` is only used to label errors.
    ///
    /// Duplicate keys are a parse error rather than last-one-wins.
    pub fn parse(text: &str, path: &Path) -> Result<Self, MetadataError> {
        let empty = || MetadataError::EmptyDocument {
            path: path.to_path_buf(),
        };
        let parse_error = |source: serde_yaml::Error| MetadataError::Parse {
            path: path.to_path_buf(),
            source,
        };

        if is_blank_document(text) {
            return Err(empty());
        }

        let value: Value = serde_yaml::from_str(text).map_err(parse_error)?;

        let mapping = match value {
            Value::Null => return Err(empty()),
            Value::Mapping(mapping) if mapping.is_empty() => return Err(empty()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(MetadataError::NotAMapping {
                    path: path.to_path_buf(),
                })
            }
        };

        let mut structured = HashSet::new();
        for (key, value) in &mapping {
            let Some(key) = scalar_text(key) else {
                return Err(MetadataError::InvalidField {
                    field: format!("{:?}", key),
                    reason: "is not a valid field name".to_string(),
                });
            };
            if is_structured(&key, value)? {
                structured.insert(key);
            }
        }

        // The shapes are known to be sound; read the document again so scalars
        // keep their source text instead of the resolved number or bool.
        let fields = SourceText {
            structured: &structured,
        }
        .deserialize(serde_yaml::Deserializer::from_str(text))
        .map_err(parse_error)?;

        Ok(MetadataDocument {
            path: path.to_path_buf(),
            fields,
        })
    }

    /// Raw value of a field; `None` when it is absent or null.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|value| value.as_deref())
    }

    /// Confirm every required field is present, reporting the first one that is not.
    pub fn validate(&self) -> Result<(), MetadataError> {
        self.required_values().map(|_| ())
    }

    /// Validate the document and fill optional fields from `defaults`.
    pub fn resolve(&self, defaults: &FieldDefaults) -> Result<ThesisMetadata, MetadataError> {
        let [title, author, supervisor, advisor, date] = self.required_values()?;
        tracing::debug!("required fields present in {}", self.path.display());

        let optional = |field: &str| -> String {
            let fallback = defaults.for_field(field).unwrap_or_default();
            self.non_blank(field)
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string())
        };

        let keywords_source = self
            .non_blank("keywords")
            .unwrap_or(defaults.keywords.as_str());
        let keywords = keywords_source
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let abstract_text = self
            .non_blank("abstract")
            .map(crate::core::latex::flatten_whitespace)
            .unwrap_or_default();

        Ok(ThesisMetadata {
            title: title.to_string(),
            author: author.to_string(),
            supervisor: supervisor.to_string(),
            advisor: advisor.to_string(),
            date: date.to_string(),
            degree: optional("degree"),
            school: optional("school"),
            department: optional("department"),
            program: optional("program"),
            major: optional("major"),
            license: optional("license"),
            keywords,
            abstract_text,
        })
    }

    /// Values of [`REQUIRED_FIELDS`], in order; errors on the first absent one.
    fn required_values(&self) -> Result<[&str; 5], MetadataError> {
        let mut values = [""; 5];
        for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
            *slot = self.get(field).ok_or_else(|| MetadataError::MissingField {
                field,
                path: self.path.clone(),
            })?;
        }
        Ok(values)
    }

    /// Value of an optional field unless it is absent, null or whitespace only.
    fn non_blank(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(value) if !value.trim().is_empty() => Some(value),
            Some(_) => {
                tracing::warn!("field '{}' is blank, using default", field);
                None
            }
            None => None,
        }
    }
}

/// Metadata after validation and default resolution. All values are raw (unescaped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThesisMetadata {
    pub title: String,
    pub author: String,
    pub supervisor: String,
    pub advisor: String,
    pub date: String,
    pub degree: String,
    pub school: String,
    pub department: String,
    pub program: String,
    pub major: String,
    pub license: String,
    pub keywords: Vec<String>,
    /// Abstract collapsed to a single line; empty when not provided.
    pub abstract_text: String,
}

impl ThesisMetadata {
    /// Publication year: the text before the first `-` of the date, or the whole date.
    pub fn year(&self) -> &str {
        match self.date.split_once('-') {
            Some((year, _)) => year,
            None => &self.date,
        }
    }

    /// Keywords joined by single spaces, as written into the PDF metadata.
    pub fn keywords_text(&self) -> String {
        self.keywords.join(" ")
    }
}

fn is_blank_document(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Whether a field holds a sequence or mapping. Only `keywords` may be a
/// list (of scalars); other known fields must be scalars, and structured
/// values on unknown fields are skipped.
fn is_structured(field: &str, value: &Value) -> Result<bool, MetadataError> {
    let invalid = |reason: &str| MetadataError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    match value {
        Value::Tagged(tagged) => is_structured(field, &tagged.value),
        Value::Sequence(items) if field == "keywords" => {
            if items.iter().all(|item| scalar_text(item).is_some()) {
                Ok(true)
            } else {
                Err(invalid("must be a list of words"))
            }
        }
        Value::Sequence(_) | Value::Mapping(_) if is_known_field(field) => {
            Err(invalid("must be a scalar value"))
        }
        Value::Sequence(_) | Value::Mapping(_) => Ok(true),
        _ => Ok(false),
    }
}

/// Collects each scalar field as its source text. Keys in `structured` are
/// skipped, except a `keywords` list, which is joined by spaces.
struct SourceText<'a> {
    structured: &'a HashSet<String>,
}

impl<'de> DeserializeSeed<'de> for SourceText<'_> {
    type Value = IndexMap<String, Option<String>>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> de::Visitor<'de> for SourceText<'_> {
    type Value = IndexMap<String, Option<String>>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping of metadata fields")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut fields = IndexMap::new();
        while let Some(key) = map.next_key::<String>()? {
            if !self.structured.contains(&key) {
                let text: Option<String> = map.next_value()?;
                fields.insert(key, text);
            } else if key == "keywords" {
                let words: Vec<String> = map.next_value()?;
                fields.insert(key, Some(words.join(" ")));
            } else {
                map.next_value::<IgnoredAny>()?;
                tracing::debug!("ignoring structured field '{}'", key);
            }
        }
        Ok(fields)
    }
}
