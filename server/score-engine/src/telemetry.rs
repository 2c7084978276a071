//! `tracing` subscriber setup. Logs go to stderr; stdout carries only JSON.

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::EngineError;

/// Install the global subscriber. `RUST_LOG` wins over `config.log_level`.
pub fn init(config: &Config) -> Result<(), EngineError> {
  let env_filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
      EngineError::telemetry(format!("invalid log filter '{}': {}", config.log_level, e))
    })?,
  };

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .compact()
    .with_ansi(false)
    .try_init()
    .map_err(|e| EngineError::telemetry(e.to_string()))
}
