pub mod args;
pub mod commands;

pub use args::{OutputArgs, TransformArgs};
use crate::logging::config::LoggingConfig;
use clap::Parser;
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nARGUMENTS:\n{positionals}\n\
\nOPTIONS:\n{options}\n\
{after-help}\n";

#[derive(Parser, Debug)]
#[command(name = "thesis-metadata")]
#[command(version = crate::VERSION)]
#[command(about = "Generate LaTeX macros, PDF metadata and the abstract from metadata.yaml")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    long_about = "Reads the thesis metadata file, checks the required fields (title, author, supervisor, advisor, date), fills optional fields from defaults and writes the abstract, macro and .xmpdata files."
)]
#[command(
    after_help = "Example:\n    thesis-metadata metadata.yaml build/metadata_config.tex build/main.xmpdata build/abstract.tex"
)]
pub struct Args {
    #[command(flatten)]
    pub transform: TransformArgs,

    #[command(flatten)]
    pub options: OutputArgs,
}

impl Args {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_args(
            self.options.quiet,
            self.options.log_level.as_deref(),
            self.options.log_output,
        )
    }
}

/// Parse the command line. Usage errors print to stderr and map to exit status 1;
/// `--help` and `--version` print to stdout and map to 0.
pub fn parse_args() -> std::result::Result<Args, ExitCode> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(iter: I) -> std::result::Result<Args, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(iter).map_err(|err| {
        let code = if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
        let _ = err.print();
        code
    })
}

pub fn run(args: Args) -> crate::Result<()> {
    commands::transform(args.transform, &args.options)
}
