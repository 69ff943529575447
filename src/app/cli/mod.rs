//! CLI Adapter.
//!
//! Resolves runner options for the current process and prints them as JSON.

use thiserror::Error;

use crate::domain::{Options, ToucaError};
use crate::ports::TransportError;
use crate::services::{HttpTransport, ProcessEnvironment};

use super::pipeline::resolve_runner_options;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Touca(#[from] ToucaError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to render options: {0}")]
    Render(#[from] serde_json::Error),
}

/// Entry point for the CLI.
pub fn run() {
    if let Err(e) = resolve_and_print() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_and_print() -> Result<(), CliError> {
    let mut transport = HttpTransport::new()?;
    let mut options = Options::default();
    resolve_runner_options(std::env::args_os(), &mut options, &mut transport, &ProcessEnvironment)?;
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
