//! Hard score ceilings for severe, explicitly observed failures.
//!
//! Every rule is checked independently; the strictest cap wins and every
//! fired rule keeps its reason. Absent data never fires a gate.

use crate::types::{BasicInputs, GateResult};

struct GateRule {
  cap: u8,
  reason: &'static str,
  fires: fn(&BasicInputs) -> bool,
}

fn exceeds(value: Option<f64>, limit: f64) -> bool {
  matches!(value, Some(v) if v > limit)
}

fn no_https(i: &BasicInputs) -> bool {
  i.seo_key.https == Some(false)
}

fn not_indexable(i: &BasicInputs) -> bool {
  i.seo_key.indexable == Some(false)
}

fn slow_lcp(i: &BasicInputs) -> bool {
  exceeds(i.lcp_ms, 4000.0)
}

fn slow_inp(i: &BasicInputs) -> bool {
  exceeds(i.inp_ms, 500.0)
}

fn unstable_cls(i: &BasicInputs) -> bool {
  exceeds(i.cls, 0.25)
}

fn oversized_page(i: &BasicInputs) -> bool {
  exceeds(i.page_weight_kb, 4000.0)
}

fn too_many_requests(i: &BasicInputs) -> bool {
  exceeds(i.requests, 120.0)
}

fn no_viewport(i: &BasicInputs) -> bool {
  i.mobile_ready.viewport_meta == Some(false)
}

fn cta_below_fold(i: &BasicInputs) -> bool {
  i.mobile_ready.cta_above_fold == Some(false)
}

/// Evaluated in this order so reasons come out stable.
const GATES: &[GateRule] = &[
  GateRule { cap: 40, reason: "No HTTPS", fires: no_https },
  GateRule { cap: 45, reason: "Page not indexable", fires: not_indexable },
  GateRule { cap: 65, reason: "LCP > 4s (slow on mobile)", fires: slow_lcp },
  GateRule { cap: 65, reason: "INP > 500ms (slow tap response)", fires: slow_inp },
  GateRule { cap: 70, reason: "CLS > 0.25 (unstable layout)", fires: unstable_cls },
  GateRule { cap: 75, reason: "Page > 4MB", fires: oversized_page },
  GateRule { cap: 80, reason: "Too many files (>120)", fires: too_many_requests },
  GateRule { cap: 70, reason: "No mobile viewport", fires: no_viewport },
  GateRule { cap: 85, reason: "CTA below the fold", fires: cta_below_fold },
];

pub fn apply_gates(i: &BasicInputs) -> GateResult {
  let mut result = GateResult::open();
  for rule in GATES.iter().filter(|rule| (rule.fires)(i)) {
    result.restrict(rule.cap, rule.reason);
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{MobileReady, SeoKey};

  #[test]
  fn empty_inputs_fire_nothing() {
    let g = apply_gates(&BasicInputs::default());
    assert_eq!(g.cap, 100);
    assert!(g.reasons.is_empty());
  }

  #[test]
  fn thresholds_are_exclusive() {
    let i = BasicInputs {
      lcp_ms: Some(4000.0),
      inp_ms: Some(500.0),
      cls: Some(0.25),
      page_weight_kb: Some(4000.0),
      requests: Some(120.0),
      ..Default::default()
    };
    assert!(apply_gates(&i).is_clear());
  }

  #[test]
  fn strictest_cap_wins_and_all_reasons_kept() {
    let i = BasicInputs {
      lcp_ms: Some(5200.0),
      seo_key: SeoKey {
        https: Some(false),
        ..Default::default()
      },
      mobile_ready: MobileReady {
        cta_above_fold: Some(false),
        ..Default::default()
      },
      ..Default::default()
    };
    let g = apply_gates(&i);
    assert_eq!(g.cap, 40);
    assert_eq!(
      g.reasons,
      vec!["No HTTPS", "LCP > 4s (slow on mobile)", "CTA below the fold"]
    );
  }

  #[test]
  fn adding_a_violation_never_raises_cap() {
    let mut i = BasicInputs {
      cls: Some(0.4),
      ..Default::default()
    };
    let before = apply_gates(&i);
    assert_eq!(before.cap, 70);

    i.requests = Some(150.0);
    let after = apply_gates(&i);
    assert_eq!(after.cap, 70);
    assert_eq!(after.reasons.len(), 2);

    i.seo_key.indexable = Some(false);
    assert_eq!(apply_gates(&i).cap, 45);
  }

  #[test]
  fn explicit_true_checks_fire_nothing() {
    let i = BasicInputs {
      seo_key: SeoKey {
        https: Some(true),
        indexable: Some(true),
        ..Default::default()
      },
      mobile_ready: MobileReady {
        viewport_meta: Some(true),
        tap_targets_ok: Some(false),
        cta_above_fold: Some(true),
      },
      ..Default::default()
    };
    // tap targets only ever penalize, never gate
    assert!(apply_gates(&i).is_clear());
  }
}
