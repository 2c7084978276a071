//! Site Health Score Engine — deterministic, rule-based scoring for hotel websites.
//!
//! Normalizes heterogeneous performance/SEO records into canonical
//! `BasicInputs`, then scores them: five weighted sub-scores, hard gates,
//! additive penalties and a final power-curve deflation.
//!
//! No DB, no network; pure computation. Safe to call concurrently.

pub mod config;
pub mod curves;
pub mod error;
pub mod fingerprint;
pub mod gates;
pub mod normalize;
pub mod pagespeed;
pub mod penalties;
pub mod score;
pub mod subscores;
pub mod telemetry;
pub mod types;

pub use config::Config;
pub use error::EngineError;
pub use normalize::to_basic_inputs;
pub use score::compute_basic_score;
pub use types::{BasicInputs, GateResult, Label, Penalty, ScoreDetail, ScoreReport, Subscores};

/// Normalize one raw record and score it (no I/O).
pub fn run(raw: &serde_json::Value) -> ScoreReport {
  let inputs = to_basic_inputs(raw);
  let score = compute_basic_score(&inputs);
  ScoreReport {
    fingerprint: fingerprint::compute(&inputs),
    inputs: Some(inputs),
    score,
  }
}
