//! The five weighted category scores.

use crate::curves::{self, clamp, score_cls, score_lower_better};
use crate::types::{BasicInputs, Subscores};

/// 100 unless the check explicitly failed.
fn check(flag: Option<bool>, when_failed: f64) -> f64 {
  if flag == Some(false) {
    when_failed
  } else {
    100.0
  }
}

pub fn compute_subscores(i: &BasicInputs) -> Subscores {
  let cwv = clamp(
    score_lower_better(i.lcp_ms, curves::LCP_MS) * 0.5
      + score_lower_better(i.inp_ms, curves::INP_MS) * 0.3
      + score_cls(i.cls) * 0.2,
  );
  let weight = clamp(
    score_lower_better(i.page_weight_kb, curves::PAGE_WEIGHT_KB) * 0.7
      + score_lower_better(i.requests, curves::REQUESTS) * 0.3,
  );
  let ttfb = clamp(score_lower_better(i.ttfb_ms, curves::TTFB_MS));

  let m = &i.mobile_ready;
  let mobile = clamp(
    check(m.viewport_meta, 40.0) * 0.5
      + check(m.tap_targets_ok, 60.0) * 0.2
      + check(m.cta_above_fold, 70.0) * 0.3,
  );

  let s = &i.seo_key;
  let seo = clamp(
    check(s.indexable, 30.0) * 0.35
      + check(s.https, 40.0) * 0.25
      + check(s.title_ok, 70.0) * 0.2
      + check(s.meta_ok, 70.0) * 0.2,
  );

  Subscores {
    cwv,
    weight,
    ttfb,
    mobile,
    seo,
  }
}
