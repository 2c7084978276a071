//! Process configuration with sane defaults.
//!
//! Only the process surface is configurable. Scoring thresholds, weights and
//! the deflation exponent are fixed.

use crate::error::EngineError;

pub const ENV_LOG: &str = "SCORE_ENGINE_LOG";
pub const ENV_PRETTY: &str = "SCORE_ENGINE_PRETTY";
pub const ENV_INCLUDE_INPUTS: &str = "SCORE_ENGINE_INCLUDE_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// `tracing` filter used when `RUST_LOG` is unset.
  pub log_level: String,
  /// Pretty-print output JSON (one object may then span several lines).
  pub pretty: bool,
  /// Emit the normalized inputs beside each score.
  pub include_inputs: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      log_level: "warn".to_string(),
      pretty: false,
      include_inputs: true,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, EngineError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; unset keys keep their defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
    let mut config = Self::default();
    if let Some(level) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
      config.log_level = level.trim().to_string();
    }
    if let Some(v) = lookup(ENV_PRETTY) {
      config.pretty = parse_bool(ENV_PRETTY, &v)?;
    }
    if let Some(v) = lookup(ENV_INCLUDE_INPUTS) {
      config.include_inputs = parse_bool(ENV_INCLUDE_INPUTS, &v)?;
    }
    Ok(config)
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, EngineError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    _ => Err(EngineError::config(key, "expected true|false|1|0|yes|no|on|off")),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn reads_all_keys() {
    let config = Config::from_lookup(lookup_from(&[
      (ENV_LOG, "debug"),
      (ENV_PRETTY, "yes"),
      (ENV_INCLUDE_INPUTS, "0"),
    ]))
    .unwrap();
    assert_eq!(config.log_level, "debug");
    assert!(config.pretty);
    assert!(!config.include_inputs);
  }

  #[test]
  fn rejects_bad_bool() {
    let err = Config::from_lookup(lookup_from(&[(ENV_PRETTY, "maybe")])).unwrap_err();
    assert!(err.to_string().contains(ENV_PRETTY));
  }
}
