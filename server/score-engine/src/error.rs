//! Structured error types for the score engine's process surface.
//!
//! Scoring itself never fails; these cover config, logging setup and I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("config: {key}: {reason}")]
  Config { key: String, reason: String },

  #[error("telemetry: {0}")]
  Telemetry(String),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl EngineError {
  pub fn config(key: &str, reason: &str) -> Self {
    Self::Config {
      key: key.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn telemetry(msg: impl Into<String>) -> Self {
    Self::Telemetry(msg.into())
  }
}
