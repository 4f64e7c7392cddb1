pub mod config;
pub mod error;
pub mod latex;
pub mod metadata;
pub mod render;
pub mod transformer;

pub use config::{DefaultsLoader, DefaultsValidator, FieldDefaults};
pub use error::MetadataError;
pub use metadata::{MetadataDocument, ThesisMetadata, OPTIONAL_FIELDS, REQUIRED_FIELDS};
pub use transformer::{MetadataTransformer, OutputPaths};
