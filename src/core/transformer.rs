use crate::core::config::FieldDefaults;
use crate::core::error::MetadataError;
use crate::core::metadata::{MetadataDocument, ThesisMetadata};
use crate::core::render;
use std::fs;
use std::path::{Path, PathBuf};

/// Destinations for the generated artifacts.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// LaTeX macro definitions (`metadata_config.tex`)
    pub macros: PathBuf,
    /// PDF metadata consumed by pdfx (`main.xmpdata`)
    pub xmpdata: PathBuf,
    /// Flattened abstract paragraph
    pub abstract_file: PathBuf,
}

/// Turns a metadata YAML file into the macro, XMP and abstract artifacts.
pub struct MetadataTransformer {
    defaults: FieldDefaults,
}

impl MetadataTransformer {
    pub fn new(defaults: FieldDefaults) -> Self {
        MetadataTransformer { defaults }
    }

    /// Load and resolve the metadata without writing anything.
    pub fn prepare(&self, input: &Path) -> Result<ThesisMetadata, MetadataError> {
        MetadataDocument::load(input)?.resolve(&self.defaults)
    }

    /// Run the full pipeline. Every input check happens before the first write;
    /// a failed write leaves files written earlier in place.
    pub fn transform(&self, input: &Path, outputs: &OutputPaths) -> Result<(), MetadataError> {
        let metadata = self.prepare(input)?;
        let source_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());

        write_artifact(&outputs.abstract_file, &render::render_abstract(&metadata))?;
        write_artifact(
            &outputs.macros,
            &render::render_macros(&metadata, &source_name),
        )?;
        write_artifact(&outputs.xmpdata, &render::render_xmpdata(&metadata))?;

        Ok(())
    }
}

impl Default for MetadataTransformer {
    fn default() -> Self {
        Self::new(FieldDefaults::default())
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), MetadataError> {
    fs::write(path, contents).map_err(|err| MetadataError::write(path, err))?;
    tracing::info!("Generated: {}", path.display());
    Ok(())
}
