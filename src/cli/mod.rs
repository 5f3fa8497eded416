//! CLI command definitions and handlers

mod audit;
mod init;
mod output;
mod plugin;
mod score;

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::models::Measurement;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EcoIndex - environmental impact score for web pages
///
/// Scores DOM size, request count and transferred bytes against the
/// ecoindex.fr reference distributions.
#[derive(Parser, Debug)]
#[command(name = "ecoindex")]
#[command(
    version,
    about = "Environmental impact score for web pages: EcoIndex, grade A-G, GHG and water estimates",
    after_help = "\
Examples:
  ecoindex score --dom 800 --requests 60 --bytes 2400000   Score raw measurements
  ecoindex audit page.json                                 Audit host artifacts
  ecoindex audit pages/*.json --format markdown -o eco.md  Batch audit to Markdown
  ecoindex audit page.json --fail-on E                     Exit code 1 on grade E or worse
  ecoindex plugin                                          Print plugin registration"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ecoindex.toml or .ecoindexrc.json in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an ecoindex.toml with the default settings
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Score raw page measurements
    Score {
        /// Number of elements in the page body
        #[arg(long)]
        dom: u64,

        /// Number of network requests
        #[arg(long)]
        requests: u64,

        /// Total transferred bytes
        #[arg(long)]
        bytes: u64,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Reject measurements beyond the reference tables
        #[arg(long)]
        strict: bool,
    },

    /// Audit one or more host artifact files
    #[command(after_help = "\
Artifact files are JSON documents with `networkRequests` and `DOMStats`:
  {\"networkRequests\": [{\"transferSize\": 1024}], \"DOMStats\": {\"totalBodyElements\": 300}}")]
    Audit {
        /// Artifact files to audit
        #[arg(required = true)]
        artifacts: Vec<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if any page is graded this or worse (A-G)
        #[arg(long)]
        fail_on: Option<String>,

        /// Reject pages with measurements beyond the reference tables
        #[arg(long)]
        strict: bool,
    },

    /// Print the plugin registration and audit metadata as JSON
    Plugin,
}

/// Configure tracing from RUST_LOG, falling back to --log-level
pub fn init_logging(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve configuration: explicit --config file, else the working directory
fn resolve_config(explicit: Option<&PathBuf>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Cannot read current directory")?;
            Ok(load_project_config(&cwd))
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init::run(&path),

        Commands::Plugin => plugin::run(),

        Commands::Score {
            dom,
            requests,
            bytes,
            format,
            strict,
        } => {
            let config = resolve_config(cli.config.as_ref())?;
            let format = format
                .or(config.defaults.format.clone())
                .unwrap_or_else(|| "text".to_string());
            let strict = strict || config.defaults.strict.unwrap_or(false);
            score::run(Measurement::new(dom, requests, bytes), &format, strict, &config)
        }

        Commands::Audit {
            artifacts,
            format,
            output,
            fail_on,
            strict,
        } => {
            let config = resolve_config(cli.config.as_ref())?;
            let format = format
                .or(config.defaults.format.clone())
                .unwrap_or_else(|| "text".to_string());
            let strict = strict || config.defaults.strict.unwrap_or(false);
            audit::run(
                &artifacts,
                &format,
                output.as_deref(),
                fail_on,
                strict,
                &config,
            )
        }
    }
}
