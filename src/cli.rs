//! Command-line interface for inspecting site settings.
//!
//! Every command writes its result to the supplied writer so the same code
//! path serves the binary and the tests.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use siteconf_config::Settings;
use siteconf_core::{DEFAULT_SEPARATOR, parse_host_list};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "siteconf")]
#[command(about = "SiteConf - load and inspect site settings", long_about = None)]
pub struct Cli {
    /// Project base directory; `.env` and relative paths resolve against it
    #[arg(short = 'b', long, global = true, default_value = ".")]
    pub base_dir: PathBuf,

    /// Also write JSON logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load settings and report whether they are complete
    Check,
    /// Print the loaded settings as JSON with secrets redacted
    Show {
        /// Pretty-print the JSON output
        #[arg(short = 'p', long)]
        pretty: bool,
    },
    /// Parse a host or origin list and print one entry per line
    Hosts {
        /// Raw list, e.g. "localhost, 127.0.0.1"
        value: String,

        /// Separator between entries
        #[arg(short = 's', long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
    },
}

/// Runs `command`, writing its output to `out`.
///
/// # Errors
///
/// Any settings load failure, or an I/O error writing to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Check => {
            let settings = load(cli)?;
            writeln!(
                out,
                "Settings OK (ENV={}, DEBUG={}, {} allowed host(s), {} trusted origin(s))",
                settings.security.environment,
                settings.security.debug,
                settings.security.allowed_hosts.len(),
                settings.security.csrf_trusted_origins.len(),
            )?;
        }
        Commands::Show { pretty } => {
            let settings = load(cli)?;
            let json = settings.to_json()?;
            let rendered = if *pretty {
                serde_json::to_string_pretty(&json)?
            } else {
                serde_json::to_string(&json)?
            };
            writeln!(out, "{rendered}")?;
        }
        Commands::Hosts { value, separator } => {
            for host in parse_host_list(value, separator)? {
                writeln!(out, "{host}")?;
            }
        }
    }

    Ok(())
}

fn load(cli: &Cli) -> Result<Settings> {
    let base_dir = cli
        .base_dir
        .canonicalize()
        .with_context(|| format!("base directory {} is not accessible", cli.base_dir.display()))?;
    info!(base_dir = %base_dir.display(), "Loading settings");

    Settings::from_env(base_dir).context("failed to load settings")
}
