#![cfg(not(tarpaulin_include))]

use clap::Parser;
use fuzzy_sheet_diff::app;
use fuzzy_sheet_diff::config::Config;

/// Main entry point for the comparison web application
///
/// Reads the server settings from the command line (or the environment),
/// sets up logging and serves the upload page until the process is stopped.
///
/// # Logging
/// * Defaults to `info`; override with `RUST_LOG`
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Success or error object
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    log::debug!("starting with {:?}", config);

    app::run(config).await
}
