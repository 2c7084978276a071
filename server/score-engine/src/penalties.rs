//! Soft point deductions; every matching rule applies.

use crate::types::{BasicInputs, Penalty};

struct PenaltyRule {
  id: &'static str,
  pts: i32,
  reason: &'static str,
  fires: fn(&BasicInputs) -> bool,
}

fn exceeds(value: Option<f64>, limit: f64) -> bool {
  matches!(value, Some(v) if v > limit)
}

fn heavy_page(i: &BasicInputs) -> bool {
  exceeds(i.page_weight_kb, 2000.0)
}

fn many_requests(i: &BasicInputs) -> bool {
  exceeds(i.requests, 80.0)
}

fn slow_ttfb(i: &BasicInputs) -> bool {
  exceeds(i.ttfb_ms, 1800.0)
}

fn blocking_third_party(i: &BasicInputs) -> bool {
  i.has_blocking_third_party == Some(true)
}

fn weak_snippets(i: &BasicInputs) -> bool {
  i.seo_key.title_ok == Some(false) || i.seo_key.meta_ok == Some(false)
}

fn h1_duplicate(i: &BasicInputs) -> bool {
  i.seo_key.h1_unique == Some(false)
}

fn small_tap_targets(i: &BasicInputs) -> bool {
  i.mobile_ready.tap_targets_ok == Some(false)
}

const PENALTIES: &[PenaltyRule] = &[
  PenaltyRule { id: "heavy-page", pts: -5, reason: "Heavy page (>2MB)", fires: heavy_page },
  PenaltyRule { id: "too-many-requests", pts: -3, reason: "Too many files (>80)", fires: many_requests },
  PenaltyRule { id: "slow-ttfb", pts: -5, reason: "Slow server (>1800ms)", fires: slow_ttfb },
  PenaltyRule { id: "blocking-3p", pts: -4, reason: "Blocking third-party script", fires: blocking_third_party },
  PenaltyRule { id: "weak-snippets", pts: -3, reason: "Weak title/description", fires: weak_snippets },
  PenaltyRule { id: "h1-dup", pts: -2, reason: "Missing/duplicate H1", fires: h1_duplicate },
  PenaltyRule { id: "tap-targets", pts: -3, reason: "Small tap targets", fires: small_tap_targets },
];

pub fn compute_penalties(i: &BasicInputs) -> Vec<Penalty> {
  PENALTIES
    .iter()
    .filter(|rule| (rule.fires)(i))
    .map(|rule| Penalty {
      id: rule.id.to_string(),
      pts: rule.pts,
      reason: rule.reason.to_string(),
    })
    .collect()
}

/// Sum of all deductions (always ≤ 0).
pub fn total_points(penalties: &[Penalty]) -> i32 {
  penalties.iter().map(|p| p.pts).sum()
}
