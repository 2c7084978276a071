//! Stable fingerprint of normalized inputs.
//!
//! Two reports with the same fingerprint were scored from identical inputs, so
//! their scores must match.

use crate::types::BasicInputs;

fn update_number(hasher: &mut blake3::Hasher, value: Option<f64>) {
  match value {
    Some(v) => {
      hasher.update(b"n");
      hasher.update(&v.to_bits().to_le_bytes());
    }
    None => {
      hasher.update(b"-");
    }
  }
}

fn update_flag(hasher: &mut blake3::Hasher, value: Option<bool>) {
  let tag: &[u8] = match value {
    Some(true) => b"t",
    Some(false) => b"f",
    None => b"-",
  };
  hasher.update(tag);
}

/// Hex digest over every input field in declaration order.
pub fn compute(inputs: &BasicInputs) -> String {
  let mut hasher = blake3::Hasher::new();
  for value in [
    inputs.lcp_ms,
    inputs.inp_ms,
    inputs.cls,
    inputs.ttfb_ms,
    inputs.page_weight_kb,
    inputs.requests,
  ] {
    update_number(&mut hasher, value);
    hasher.update(b"|");
  }

  let m = &inputs.mobile_ready;
  let s = &inputs.seo_key;
  for flag in [
    m.viewport_meta,
    m.tap_targets_ok,
    m.cta_above_fold,
    s.indexable,
    s.https,
    s.title_ok,
    s.meta_ok,
    s.h1_unique,
    inputs.has_blocking_third_party,
  ] {
    update_flag(&mut hasher, flag);
  }

  let hash = hasher.finalize();
  // 16 bytes is plenty to tell input sets apart.
  let hex = hash.to_hex();
  hex[..32].to_string()
}
