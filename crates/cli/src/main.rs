//! layerconf - inspect layered configuration from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Declare configuration points from a manifest file and run the resolver.
//! - Print the registry or the resolved values.
//!
//! Does NOT handle:
//! - Resolution logic itself (see `crates/core`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults
//!   and values for the environment loader.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod error;
mod manifest;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {:#}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // RUST_LOG always applies; --verbose adds a DEBUG directive, otherwise WARN.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init();

    let result = match cli.command {
        Commands::Check => commands::check::run(&cli.manifest),
        Commands::Show(args) => commands::show::run(&cli.manifest, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

/// Load `.env` from the working directory unless `DOTENV_DISABLED` is set.
///
/// A missing `.env` file is not an error.
fn load_dotenv() -> anyhow::Result<()> {
    let disabled = matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    );
    if disabled {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(anyhow::anyhow!(
            "Failed to parse .env file at position {idx}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
        )),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to read .env file")),
    }
}
