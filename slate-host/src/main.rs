//! Slate Console Host
//!
//! Loads the bundled plugins and drives them from the terminal.
//!
//! Input (stdin, one per line):
//! - `<command-id> [argument]`: run a registered command
//! - `help`: list registered commands
//! - `quit` / `exit`: stop (end of input works too)
//!
//! Prompts and notifications are written to stdout; logs go to stderr.
//!
//! Environment:
//! - `SLATE_LOG`: tracing filter (falls back to `RUST_LOG`, default `info`)
//! - `SLATE_PLUGINS`: comma-separated plugin names to activate (default: all)

mod config;
mod console;
mod loader;
mod session;

use config::HostConfig;
use console::Console;
use slate_core::{PluginError, PluginResult};
use slate_plugin::{CommandRegistry, Host};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{self, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HOST_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> ExitCode {
    let config = HostConfig::from_env();

    if let Err(e) = init_logging(&config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), error = %e, "host stopped");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout belongs to the console surfaces.
fn init_logging(config: &HostConfig) -> PluginResult<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| PluginError::Config(format!("invalid log filter '{}': {}", config.log_filter, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PluginError::Config(format!("cannot install logger: {}", e)))
}

async fn run(config: HostConfig) -> PluginResult<()> {
    info!(version = HOST_VERSION, "slate host starting");

    let registry = Arc::new(CommandRegistry::new());
    let console = Arc::new(Console::new(BufReader::new(io::stdin()), io::stdout()));
    let host = Host::new(registry.clone(), console.clone(), console.clone());

    let plugins = config.select_plugins(slate_notify::bundled_plugins())?;
    loader::activate_all(&plugins, &host).await?;
    info!(plugins = plugins.len(), commands = registry.len(), "host ready");

    session::run(&*console, &registry).await?;

    info!("slate host shutting down");
    Ok(())
}
