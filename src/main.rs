//! Command-line entrypoint for contribution statistics.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use contrib_stats::{StatsConfig, StatsError, StdoutProgressSink};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StatsError> {
    let config = load_config()?;
    init_tracing(config.verbose);
    contrib_stats::run(&config, &StdoutProgressSink).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`StatsError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StatsConfig, StatsError> {
    StatsConfig::load_from_args(env::args_os())
}

/// Installs a stderr log subscriber honouring `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
