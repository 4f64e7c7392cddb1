use std::path::Path;
use thesis_metadata::core::render::{render_abstract, render_macros, render_xmpdata};
use thesis_metadata::core::{FieldDefaults, MetadataDocument, ThesisMetadata};

fn resolve(text: &str) -> ThesisMetadata {
    MetadataDocument::parse(text, Path::new("metadata.yaml"))
        .unwrap()
        .resolve(&FieldDefaults::default())
        .unwrap()
}

const FULL: &str = r#"
title: Connection Migration and Multipath in QUIC
author: Jane Doe
supervisor: Prof. Ada Lovelace
advisor: Dr. Alan Turing
date: "2024-05-01"
degree: MSc (Tech.)
school: School of Electrical Engineering
department: Department of Information and Communications Engineering
program: Master's Programme in Computer, Communication and Information Sciences
major: Communications Engineering
license: CC BY 4.0
keywords: quic multipath
abstract: >
  Connection migration keeps QUIC sessions alive
  across address changes.
"#;

#[test]
fn test_macro_file_layout() {
    let rendered = render_macros(&resolve(FULL), "metadata.yaml");

    let expected = r"% Auto-generated from metadata.yaml
% Do not edit manually - regenerate with thesis-metadata

\thesistitle{Connection Migration and Multipath in QUIC}
\author{Jane Doe}
\thesisauthor{Jane Doe}
\supervisor{Prof. Ada Lovelace}
\advisor{Dr. Alan Turing}
\date{2024-05-01}

% Thesis class requirements
\univdegree{MSc (Tech.)}
\school{School of Electrical Engineering}
\department{Department of Information and Communications Engineering}
\degreeprogram{Master's Programme in Computer, Communication and Information Sciences}
\major{Communications Engineering}
\collaborativepartner{}
\uselogo{aalto!}

% Copyright and keywords
\copyrighttext{\noexpand\textcopyright\ 2024. Jane Doe. This work is licensed under CC BY 4.0.}{\noindent\textcopyright\ 2024\ Jane Doe. This work is licensed under CC BY 4.0.}
\keywords{quic\spc multipath}
";

    assert_eq!(rendered, expected);
}

#[test]
fn test_xmpdata_layout() {
    let rendered = render_xmpdata(&resolve(FULL));

    insta::assert_snapshot!(rendered.trim_end(), @r"
\Title {Connection Migration and Multipath in QUIC}
\Author {Jane Doe}
\Language {en}
\Copyright {© 2024 Jane Doe}
\CopyrightURL {}
\Subject {thesis}
\Keywords {quic multipath}
");
}

#[test]
fn test_abstract_folded_scalar() {
    let rendered = render_abstract(&resolve(FULL));
    assert_eq!(
        rendered,
        "Connection migration keeps QUIC sessions alive across address changes.\n"
    );
}

#[test]
fn test_special_characters_only_escaped_in_macros() {
    let text = FULL
        .replace("author: Jane Doe", "author: \"J. O'Neil & Co_Author\"")
        .replace("keywords: quic multipath", "keywords: \"50% #quic\"");
    let metadata = resolve(&text);

    let macros = render_macros(&metadata, "metadata.yaml");
    assert!(macros.contains("\\author{J. O'Neil \\& Co\\_Author}"));
    assert!(macros.contains("\\keywords{50\\%\\spc \\#quic}"));

    let xmpdata = render_xmpdata(&metadata);
    assert!(xmpdata.contains("\\Author {J. O'Neil & Co_Author}"));
    assert!(xmpdata.contains("\\Keywords {50% #quic}"));
}

#[test]
fn test_custom_defaults_flow_into_macros() {
    let defaults = FieldDefaults {
        degree: "DSc".to_string(),
        keywords: "dissertation".to_string(),
        ..FieldDefaults::default()
    };
    let metadata = MetadataDocument::parse(
        "title: T\nauthor: A\nsupervisor: S\nadvisor: V\ndate: 2025-01-10\n",
        Path::new("metadata.yaml"),
    )
    .unwrap()
    .resolve(&defaults)
    .unwrap();

    let macros = render_macros(&metadata, "metadata.yaml");
    assert!(macros.contains("\\univdegree{DSc}"));
    assert!(macros.contains("\\keywords{dissertation}"));
    assert!(render_xmpdata(&metadata).contains("\\Keywords {dissertation}"));
}
