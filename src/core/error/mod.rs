use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures raised while turning a metadata document into LaTeX artifacts.
///
/// Every variant carries the path or field name that caused it so the CLI can
/// print a single self-describing diagnostic line.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{} must contain a mapping of metadata fields", path.display())]
    NotAMapping { path: PathBuf },

    #[error("{} is empty", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("missing required field '{field}' in {}", path.display())]
    MissingField { field: &'static str, path: PathBuf },

    #[error("field '{field}' {reason}")]
    InvalidField { field: String, reason: String },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MetadataError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        MetadataError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        MetadataError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file involved in the failure, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            MetadataError::Read { path, .. }
            | MetadataError::Parse { path, .. }
            | MetadataError::NotAMapping { path }
            | MetadataError::EmptyDocument { path }
            | MetadataError::MissingField { path, .. }
            | MetadataError::Write { path, .. } => Some(path),
            MetadataError::InvalidField { .. } => None,
        }
    }
}
