//! Combine sub-scores, gates and penalties into the final score.
//!
//! Stages run strictly in order: weighted blend -> gate ceiling -> penalties
//! -> power-curve deflation -> label.

use tracing::debug;

use crate::curves::clamp;
use crate::gates::apply_gates;
use crate::penalties::{compute_penalties, total_points};
use crate::subscores::compute_subscores;
use crate::types::{BasicInputs, Label, ScoreDetail, Subscores};

/// Exponent > 1 deflates the top of the range more than the bottom.
const DEFLATION_EXPONENT: f64 = 1.25;

fn blend(s: &Subscores) -> f64 {
  clamp(s.cwv * 0.45 + s.weight * 0.20 + s.ttfb * 0.15 + s.mobile * 0.10 + s.seo * 0.10)
}

/// 100 stays 100; 90 becomes 88; 50 becomes 42.
pub fn deflate(after_penalties: f64) -> u8 {
  let curved = (clamp(after_penalties) / 100.0).powf(DEFLATION_EXPONENT) * 100.0;
  clamp(curved.round()) as u8
}

/// Score one set of inputs. Total and deterministic.
pub fn compute_basic_score(i: &BasicInputs) -> ScoreDetail {
  let subscores = compute_subscores(i);
  let raw = blend(&subscores);

  let gates = apply_gates(i);
  let after_gates = raw.min(f64::from(gates.cap));

  let penalties = compute_penalties(i);
  let after_penalties = clamp(after_gates + f64::from(total_points(&penalties)));

  let final_score = deflate(after_penalties);
  let label = Label::classify(final_score, gates.is_clear());

  debug!(
    raw,
    cap = gates.cap,
    final_score,
    gates = ?gates.reasons,
    "basic score computed"
  );

  ScoreDetail {
    raw,
    after_gates,
    after_penalties,
    final_score,
    gates,
    penalties,
    subscores,
    label,
  }
}
