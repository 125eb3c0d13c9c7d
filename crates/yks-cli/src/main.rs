use std::{
    io::{self, IsTerminal as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::{
    builder::{
        styling::{AnsiColor, Style},
        Styles,
    },
    Parser,
};
use owo_colors::OwoColorize as _;
use rayon::iter::{IntoParallelIterator as _, ParallelIterator as _};
use thiserror::Error;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use yks_diagnostic::Renderer;
use yks_workspace::{config::cli_config::CliConfig, Workspace, WorkspaceError};

use check::{check_discovered, error_chain, FileReport};
use summary::{emit_reports, ERROR_EXIT_STATUS};

mod check;
mod summary;

fn styles() -> Styles {
    Styles::styled()
        .header(Style::new().bold())
        .usage(Style::new().bold())
        .literal(AnsiColor::Blue.on_default().bold())
        .placeholder(AnsiColor::White.on_default().dimmed())
}

const HELP_TEMPLATE: &str = "\
{before-help}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}\
    ";

/// Checks that the keys of every YAML mapping are sorted, at every nesting level.
///
/// Exits with the number of violations found, or 255 if a file could not be checked.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None, styles = styles(), help_template = HELP_TEMPLATE)]
struct Cli {
    /// If provided, displays info log messages
    ///
    /// This can be overridden by the `RUST_LOG` environment variable
    #[arg(short, long)]
    verbose: bool,

    /// Traces every parse event and context transition to stdout
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    config: CliConfig,

    /// YAML files, or directories to search recursively
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to determine the current directory")]
    CurrentDir(#[source] io::Error),

    #[error("Failed to set up logging")]
    Logging(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

fn init_tracing(verbose: bool, debug: bool) -> Result<(), CliError> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(
            if verbose {
                LevelFilter::INFO
            } else {
                LevelFilter::WARN
            }
            .into(),
        )
        .from_env_lossy();
    if debug {
        filter = filter
            .add_directive("yks_lint=trace".parse()?)
            .add_directive("yks_parser=trace".parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    init_tracing(cli.verbose, cli.debug)?;

    let cwd = std::env::current_dir().map_err(CliError::CurrentDir)?;
    let workspace = Workspace::try_new(cwd, Some(cli.config))?;
    tracing::info!(config = ?workspace.config, "workspace");

    let renderer = Renderer::new(workspace.config.formats.clone());
    let discovered = workspace.discover(&cli.paths);

    // Debug traces of concurrent checks would interleave
    let reports: Vec<FileReport> = if cli.debug {
        discovered
            .into_iter()
            .map(|path| check_discovered(path, &renderer))
            .collect()
    } else {
        discovered
            .into_par_iter()
            .map(|path| check_discovered(path, &renderer))
            .collect()
    };

    let summary = emit_reports(&mut io::stdout().lock(), &reports);

    if io::stderr().is_terminal() {
        if summary.is_clean() {
            eprintln!("{}", summary.green());
        } else {
            eprintln!("{}", summary.red());
        }
    } else {
        eprintln!("{summary}");
    }

    Ok(ExitCode::from(summary.exit_status()))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::from(ERROR_EXIT_STATUS)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", error_chain(&err));
            ExitCode::from(ERROR_EXIT_STATUS)
        }
    }
}
