//! ai_worker - forward a command-line prompt to a local Ollama model.
//!
//! Prints exactly the model's reply on stdout so callers can pipe it, and
//! reports every failure on stderr.

mod backend;
mod cli;
mod config;
mod dispatcher;
mod protocol;

use anyhow::{Context, Result};
use backend::ollama::OllamaClient;
use cli::Cli;
use config::Config;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = match Cli::from_argv(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            debug!("Option parsing failed: {}", e);
            dispatcher::usage(&mut std::io::stderr());
            return Ok(());
        }
    };

    let config = Config::from_cli(&cli);
    info!("Using model {} at {}", config.model, config.host);

    let client = OllamaClient::new(config.host.clone()).context("Failed to create HTTP client")?;
    info!("Ollama client ready for {}", client.host());

    let outcome = dispatcher::run(
        cli.dispatch_args(),
        &config,
        &client,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;
    info!("Finished with {:?}", outcome);

    if config.strict_exit && outcome.exit_code() != 0 {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}

/// Install a stderr subscriber. Silent unless `RUST_LOG` asks for output, so
/// the single diagnostic line stays the only thing on stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
