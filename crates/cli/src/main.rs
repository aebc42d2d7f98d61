//! vvpctl - command-line interface for the Ververica Platform.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve configuration (flags > environment > config file > defaults).
//! - Execute REST API commands via the shared client library.
//! - Format results as tables, JSON, or YAML.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Config file parsing details (see `crates/config`).
//!
//! Invariants:
//! - Configuration is resolved once here and passed down by value; there
//!   are no process-wide config globals.
//! - Errors print to stderr and exit with a structured code.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod input;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::Cli;
use dispatch::run_command;
use error::ExitCode;
use vvp_config::ConfigLoader;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path.clone());
    }
    loader = loader
        .with_api_url(cli.api_url.clone())
        .with_api_token(cli.api_token.clone())
        .with_insecure(cli.insecure.then_some(true))
        .with_namespace(cli.namespace.clone())
        .with_output(cli.output.clone());

    let config = match loader.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if let Err(err) = run_command(cli, config).await {
        eprintln!("Error: {err:#}");
        std::process::exit(error::exit_code_for(&err).as_i32());
    }
}
