use std::fs;
use std::path::Path;
use tempfile::TempDir;
use thesis_metadata::core::{MetadataError, MetadataTransformer, OutputPaths};

fn outputs(dir: &Path) -> OutputPaths {
    OutputPaths {
        macros: dir.join("metadata_config.tex"),
        xmpdata: dir.join("main.xmpdata"),
        abstract_file: dir.join("abstract.tex"),
    }
}

fn transform(metadata: &str) -> (TempDir, Result<(), MetadataError>) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("metadata.yaml");
    fs::write(&input, metadata).unwrap();
    let result = MetadataTransformer::default().transform(&input, &outputs(temp_dir.path()));
    (temp_dir, result)
}

#[test]
fn test_missing_field_message() {
    let (_temp_dir, result) = transform("title: T\nauthor: A\n");
    let error = result.unwrap_err();
    assert!(error
        .to_string()
        .starts_with("missing required field 'supervisor' in "));
    assert!(error.path().unwrap().ends_with("metadata.yaml"));
}

#[test]
fn test_parse_error_chain_includes_yaml_cause() {
    let (_temp_dir, result) = transform("title: \"unterminated\n");
    let error = anyhow::Error::from(result.unwrap_err());
    let message = format!("{:#}", error);
    assert!(message.starts_with("failed to parse "));
    assert!(error.chain().count() >= 2);
}

#[test]
fn test_not_a_mapping_message() {
    let (_temp_dir, result) = transform("just a sentence\n");
    let error = result.unwrap_err();
    assert!(matches!(error, MetadataError::NotAMapping { .. }));
    assert!(error
        .to_string()
        .ends_with("must contain a mapping of metadata fields"));
}

#[test]
fn test_structured_required_field_message() {
    let (_temp_dir, result) = transform("title:\n  - one\n  - two\n");
    assert_eq!(
        result.unwrap_err().to_string(),
        "field 'title' must be a scalar value"
    );
}

#[test]
fn test_keyword_list_with_nested_items() {
    let (_temp_dir, result) = transform(
        "title: T\nauthor: A\nsupervisor: S\nadvisor: V\ndate: 2024\nkeywords:\n  - [nested]\n",
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "field 'keywords' must be a list of words"
    );
}
