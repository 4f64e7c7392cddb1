use crate::cli::args::{OutputArgs, TransformArgs};
use crate::core::{DefaultsLoader, MetadataTransformer};
use crate::Result;

/// Generate the macro, XMP and abstract files from one metadata file.
pub fn transform(args: TransformArgs, options: &OutputArgs) -> Result<()> {
    let defaults = DefaultsLoader::load(options.defaults.as_deref())?;
    let transformer = MetadataTransformer::new(defaults);

    tracing::debug!("transforming {}", args.metadata.display());
    transformer.transform(&args.metadata, &args.output_paths())?;
    Ok(())
}
