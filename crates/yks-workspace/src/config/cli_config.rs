use clap::Parser;
use yks_diagnostic::OutputFormat;

/// Command-line interface (CLI) configuration
#[derive(Debug, PartialEq, Parser)]
pub struct CliConfig {
    /// Comma-separated output formats: `simple`, `github` (alias `ci`) or `verbose`
    #[arg(short, long, value_delimiter = ',')]
    pub format: Option<Vec<OutputFormat>>,

    /// Comma-separated file extensions checked when walking directories
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,
}
