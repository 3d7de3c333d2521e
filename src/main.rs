//! Delivery config preprocessor
//!
//! Filter stage between a config author and the delivery orchestrator:
//! reads a YAML delivery config on stdin, writes the augmented config on stdout.

use clap::Command;
use delivery_preprocess::pipeline;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries the document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // No flags: the program is a pure stdin/stdout filter
    let _matches = Command::new("preprocess-delivery-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Add delivery-system fields (serviceAccount, resource metadata) to a Keel delivery config")
        .get_matches();

    match pipeline::run_filter().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
