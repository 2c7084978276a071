//! Normalize loosely-shaped measurement records into canonical `BasicInputs`.
//!
//! Accepted shapes:
//! - device-split: `{ url, mobile: {...}, desktop: {...}, seo: {...} }`
//! - CrUX-style: `{ field: { mobile }, lab: { mobile } }`
//! - legacy flat: `{ lcpMobile, clsDesktop, pageSizeMobile, hasTitle, ... }`
//!
//! Each field is resolved through an ordered list of lookups; the first usable
//! value wins. Nothing here fails: unknown data stays `None`, unknown checks
//! default to passing.

use serde_json::Value;
use tracing::trace;

use crate::types::{BasicInputs, MobileReady, SeoKey};

static EMPTY: Value = Value::Null;

/// One lookup: `key` on `object`.
type Source<'a> = (&'a Value, &'a str);

/// First finite, non-negative number among `sources`.
fn first_number(sources: &[Source<'_>]) -> Option<f64> {
  sources.iter().find_map(|(obj, key)| number(&obj[*key]))
}

/// First JSON boolean among `sources`.
fn first_flag(sources: &[Source<'_>]) -> Option<bool> {
  sources.iter().find_map(|(obj, key)| obj[*key].as_bool())
}

fn number(v: &Value) -> Option<f64> {
  v.as_f64().filter(|n| n.is_finite() && *n >= 0.0)
}

/// Mobile first: explicit mobile, CrUX field, lab, then desktop.
fn primary_record(raw: &Value) -> &Value {
  let candidates = [
    ("mobile", &raw["mobile"]),
    ("field.mobile", &raw["field"]["mobile"]),
    ("lab.mobile", &raw["lab"]["mobile"]),
    ("desktop", &raw["desktop"]),
  ];
  match candidates.into_iter().find(|(_, v)| !v.is_null()) {
    Some((source, record)) => {
      trace!(source, "primary device record selected");
      record
    }
    None => {
      trace!("no device record; using legacy fields only");
      &EMPTY
    }
  }
}

fn page_weight_kb(raw: &Value, perf: &Value) -> Option<f64> {
  first_number(&[(perf, "pageWeight_kb"), (perf, "totalByteWeight_kb")])
    .or_else(|| number(&perf["totalByteWeight"]).map(|bytes| (bytes / 1024.0).round()))
    .or_else(|| first_number(&[(raw, "pageSizeMobile"), (raw, "pageSizeDesktop")]))
}

fn mobile_ready(raw: &Value, primary: &Value) -> MobileReady {
  let audits = &raw["audits"];
  let device_audits = &primary["audits"];
  let check = |key: &str| first_flag(&[(audits, key), (device_audits, key)]).unwrap_or(true);

  MobileReady {
    viewport_meta: Some(check("viewportMeta")),
    tap_targets_ok: Some(check("tapTargetsOk")),
    cta_above_fold: Some(check("ctaAboveFold")),
  }
}

/// JavaScript-style truthiness, so collectors that report a list of
/// offending scripts or a count still count as set. Empty collections do not.
fn truthy(v: &Value) -> bool {
  match v {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(items) => !items.is_empty(),
    Value::Object(map) => !map.is_empty(),
  }
}

fn seo_key(raw: &Value) -> SeoKey {
  let seo = &raw["seo"];
  // Legacy presence flags are only read flat on the record.
  let has_title = raw["hasTitle"].as_bool();
  let has_description = raw["hasDescription"].as_bool();
  let has_h1 = raw["hasH1"].as_bool();
  let has_https = raw["hasHttps"].as_bool();

  let url = &raw["url"];
  let https = match url.as_str() {
    _ if !truthy(url) => true,
    Some(url) => url.starts_with("https://") || has_https == Some(true),
    // A URL we cannot read as text is not trusted as secure.
    None => has_https == Some(true),
  };

  SeoKey {
    indexable: Some(seo["indexable"].as_bool().or(has_title).unwrap_or(true)),
    https: Some(https),
    title_ok: Some(seo["titleOk"].as_bool().or(has_title).unwrap_or(true)),
    meta_ok: Some(seo["metaOk"].as_bool().or(has_description).unwrap_or(true)),
    h1_unique: Some(seo["h1Unique"].as_bool().or(has_h1).unwrap_or(true)),
  }
}

/// Map any upstream record onto `BasicInputs`. Never fails; a record with no
/// recognizable fields yields unknown metrics and passing checks.
pub fn to_basic_inputs(raw: &Value) -> BasicInputs {
  let primary = primary_record(raw);
  let perf = if primary["metrics"].is_object() {
    &primary["metrics"]
  } else {
    primary
  };

  BasicInputs {
    lcp_ms: first_number(&[
      (perf, "LCP_ms"),
      (perf, "lcp_ms"),
      (perf, "lcp"),
      (raw, "lcpMobile"),
      (raw, "lcpDesktop"),
    ]),
    inp_ms: first_number(&[
      (perf, "INP_ms"),
      (perf, "inp_ms"),
      (perf, "inp"),
      (raw, "inpMobile"),
      (raw, "inpDesktop"),
    ]),
    cls: first_number(&[
      (perf, "CLS"),
      (perf, "cls"),
      (raw, "clsMobile"),
      (raw, "clsDesktop"),
    ]),
    ttfb_ms: first_number(&[
      (perf, "TTFB_ms"),
      (perf, "ttfb"),
      (raw, "ttfbMobile"),
      (raw, "ttfbDesktop"),
    ]),
    page_weight_kb: page_weight_kb(raw, perf),
    requests: first_number(&[(perf, "requests"), (perf, "requestCount")]),
    mobile_ready: mobile_ready(raw, primary),
    seo_key: seo_key(raw),
    has_blocking_third_party: Some(truthy(&raw["thirdParties"]["blocking"])),
  }
}
