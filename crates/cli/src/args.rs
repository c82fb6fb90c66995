//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `NAME=VALUE` assignments for forced values.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "layerconf")]
#[command(about = "Resolve layered configuration declared in a manifest", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  layerconf --manifest app.json check\n  layerconf --manifest app.json show --properties app.properties -- server.port=9000\n  layerconf --manifest app.json show --set server.host=localhost --format json\n"
)]
pub struct Cli {
    /// Manifest declaring point groups (JSON)
    #[arg(
        short,
        long,
        global = true,
        env = "LAYERCONF_MANIFEST",
        default_value = "layerconf.json"
    )]
    pub manifest: PathBuf,

    /// Enable verbose logging (adds a DEBUG directive; RUST_LOG still applies)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate point names and list every canonical name
    Check,

    /// Resolve every point and print its effective value and source
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Force a value (highest precedence); may be repeated
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Key/value property file to load after command-line arguments
    #[arg(long, value_name = "FILE")]
    pub properties: Option<PathBuf>,

    /// JSON file to load after the property file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Prefix for environment variable names
    #[arg(long, env = "LAYERCONF_ENV_PREFIX")]
    pub env_prefix: Option<String>,

    /// Do not read values from environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Fall back to declared defaults for points no source defines
    #[arg(long)]
    pub defaults: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// NAME=VALUE arguments handed to the command-line loader
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Parse a `NAME=VALUE` assignment; the name is trimmed, the value kept verbatim.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
