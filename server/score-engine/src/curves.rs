//! Numeric scoring primitives shared by every sub-score.
//!
//! Missing values score a neutral 50. Values past the "bad" threshold all
//! collapse onto the same floor instead of scaling further down.

/// Score given to a metric with no measurement.
pub const NEUTRAL: f64 = 50.0;

/// Lower-is-better thresholds for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
  pub good: f64,
  pub ok: f64,
  pub bad: f64,
}

pub const LCP_MS: Thresholds = Thresholds { good: 2500.0, ok: 4000.0, bad: 6000.0 };
pub const INP_MS: Thresholds = Thresholds { good: 200.0, ok: 500.0, bad: 800.0 };
pub const PAGE_WEIGHT_KB: Thresholds = Thresholds { good: 1500.0, ok: 2500.0, bad: 4000.0 };
pub const REQUESTS: Thresholds = Thresholds { good: 60.0, ok: 80.0, bad: 120.0 };
pub const TTFB_MS: Thresholds = Thresholds { good: 800.0, ok: 1800.0, bad: 2500.0 };

const CLS_GOOD: f64 = 0.10;
const CLS_POOR: f64 = 0.25;

/// Clamp to 0..=100. NaN collapses to 0.
pub fn clamp(n: f64) -> f64 {
  if n.is_nan() {
    return 0.0;
  }
  n.clamp(0.0, 100.0)
}

fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
  if x <= x0 {
    return y0;
  }
  if x >= x1 {
    return y1;
  }
  let t = (x - x0) / (x1 - x0);
  y0 + t * (y1 - y0)
}

/// 100 up to `good`, 100→75 up to `ok`, 75→50 up to `bad`, then a flat 20.
pub fn score_lower_better(value: Option<f64>, t: Thresholds) -> f64 {
  let Some(v) = value else {
    return NEUTRAL;
  };
  if v <= t.good {
    100.0
  } else if v <= t.ok {
    lerp(v, t.good, t.ok, 100.0, 75.0)
  } else if v <= t.bad {
    lerp(v, t.ok, t.bad, 75.0, 50.0)
  } else {
    20.0
  }
}

/// CLS: 100 up to 0.10, 100→60 up to 0.25, then a flat 25.
pub fn score_cls(value: Option<f64>) -> f64 {
  let Some(v) = value else {
    return NEUTRAL;
  };
  if v <= CLS_GOOD {
    100.0
  } else if v <= CLS_POOR {
    lerp(v, CLS_GOOD, CLS_POOR, 100.0, 60.0)
  } else {
    25.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
  }

  #[test]
  fn missing_value_is_neutral() {
    assert_eq!(score_lower_better(None, LCP_MS), NEUTRAL);
    assert_eq!(score_cls(None), NEUTRAL);
  }

  #[test]
  fn lower_better_curve_segments() {
    assert_eq!(score_lower_better(Some(0.0), LCP_MS), 100.0);
    assert_eq!(score_lower_better(Some(2500.0), LCP_MS), 100.0);
    assert!(approx(score_lower_better(Some(3250.0), LCP_MS), 87.5));
    assert!(approx(score_lower_better(Some(4000.0), LCP_MS), 75.0));
    assert!(approx(score_lower_better(Some(5000.0), LCP_MS), 62.5));
    assert!(approx(score_lower_better(Some(6000.0), LCP_MS), 50.0));
  }

  #[test]
  fn past_bad_threshold_drops_to_floor() {
    assert_eq!(score_lower_better(Some(6000.1), LCP_MS), 20.0);
    assert_eq!(score_lower_better(Some(60_000.0), LCP_MS), 20.0);
    assert_eq!(score_lower_better(Some(f64::INFINITY), TTFB_MS), 20.0);
  }

  #[test]
  fn cls_curve_segments() {
    assert_eq!(score_cls(Some(0.03)), 100.0);
    assert_eq!(score_cls(Some(0.10)), 100.0);
    assert!(approx(score_cls(Some(0.175)), 80.0));
    assert!(approx(score_cls(Some(0.25)), 60.0));
    assert_eq!(score_cls(Some(0.26)), 25.0);
  }

  #[test]
  fn clamp_bounds() {
    assert_eq!(clamp(100.000_000_1), 100.0);
    assert_eq!(clamp(-3.0), 0.0);
    assert_eq!(clamp(f64::NAN), 0.0);
    assert_eq!(clamp(42.5), 42.5);
  }
}
