use crate::core::OutputPaths;
use crate::logging::ConsoleOutput;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    /// Thesis metadata file (YAML mapping)
    #[arg(value_name = "METADATA")]
    pub metadata: PathBuf,

    /// Destination for the LaTeX macro definitions
    #[arg(value_name = "MACRO_OUT")]
    pub macro_out: PathBuf,

    /// Destination for the PDF metadata (.xmpdata)
    #[arg(value_name = "XMPDATA_OUT")]
    pub xmpdata_out: PathBuf,

    /// Destination for the flattened abstract
    #[arg(value_name = "ABSTRACT_OUT")]
    pub abstract_out: PathBuf,
}

impl TransformArgs {
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths {
            macros: self.macro_out.clone(),
            xmpdata: self.xmpdata_out.clone(),
            abstract_file: self.abstract_out.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// TOML file overriding the built-in defaults for optional fields
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Tracing filter directive, e.g. debug (default: RUST_LOG, then info)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Where progress messages go: stderr, stdout or none (default: stderr)
    #[arg(long, value_name = "SINK")]
    pub log_output: Option<ConsoleOutput>,
}
