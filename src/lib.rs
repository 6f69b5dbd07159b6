//! Audit a static component documentation page.
//!
//! Checks that every expected component has a section anchor, that the
//! component scripts the page includes exist on disk, counts demo blocks and
//! confirms the Bootstrap assets are referenced.

pub mod audit;
pub mod config;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::audit::Validator;
use crate::config::{AuditConfig, ConfigFile, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug, Default)]
#[command(
    name = "docscheck",
    version,
    about = "Validate that the docs page references all components correctly"
)]
pub struct Cli {
    /// Documentation page to audit [default: index.html]
    #[arg(long, value_name = "PATH")]
    pub doc: Option<PathBuf>,

    /// Directory that referenced component scripts resolve against [default: components]
    #[arg(long, value_name = "DIR")]
    pub components_root: Option<PathBuf>,

    /// Configuration file [default: ./docscheck.toml when present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report through the exit status
    #[arg(short, long, default_value_t = false, conflicts_with = "json")]
    pub quiet: bool,
}

/// Parse the command line and run the audit. Returns the verdict.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run_with(&cli)
}

/// Run the audit for already-parsed arguments.
pub fn run_with(cli: &Cli) -> Result<bool> {
    let config = resolve_config(cli)?;
    tracing::debug!(
        component = "cli",
        document = %config.document.display(),
        components_root = %config.components_root.display(),
        expected = config.expected_components.len(),
        "Resolved configuration"
    );

    let validator = Validator::new(config);
    let report = validator.run().context("documentation audit aborted")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report::report_json(&report))?);
    } else if !cli.quiet {
        print!("{}", report::compose_report(&report, use_color(cli)));
    }

    Ok(report.verdict())
}

/// Defaults, then the config file, then command-line flags.
pub fn resolve_config(cli: &Cli) -> Result<AuditConfig> {
    let file = match &cli.config {
        Some(path) => ConfigFile::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigFile::load_optional(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("loading config {DEFAULT_CONFIG_FILE}"))?,
    };

    let mut config = AuditConfig::from_file(file).context("invalid configuration")?;
    if let Some(doc) = &cli.doc {
        config = config.with_document(doc.clone());
    }
    if let Some(root) = &cli.components_root {
        config = config.with_components_root(root.clone());
    }
    Ok(config)
}

fn use_color(cli: &Cli) -> bool {
    !cli.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
