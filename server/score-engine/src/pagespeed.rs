//! Adapt PageSpeed Insights v5 responses into device records the normalizer
//! understands.
//!
//! CrUX field percentiles are preferred over Lighthouse lab values. Metrics
//! the response does not carry stay `None`.

use serde::Serialize;
use serde_json::{json, Value};

/// One device's metrics. Timings use the collector's short keys; page weight
/// is emitted under the canonical `pageWeight_kb` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMetrics {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lcp: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cls: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inp: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ttfb: Option<f64>,
  /// Kilobytes.
  #[serde(rename = "pageWeight_kb", skip_serializing_if = "Option::is_none")]
  pub page_size: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub performance_score: Option<u8>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seo_score: Option<u8>,
}

fn non_negative(v: &Value) -> Option<f64> {
  v.as_f64().filter(|n| n.is_finite() && *n >= 0.0)
}

fn lab(audits: &Value, id: &str) -> Option<f64> {
  non_negative(&audits[id]["numericValue"])
}

fn field(crux: &Value, id: &str) -> Option<f64> {
  non_negative(&crux[id]["percentile"])
}

fn category(categories: &Value, id: &str) -> Option<u8> {
  non_negative(&categories[id]["score"]).map(|s| (s * 100.0).round().min(100.0) as u8)
}

/// Extract one device's metrics from a PSI response body.
pub fn extract_metrics(psi: &Value) -> DeviceMetrics {
  let audits = &psi["lighthouseResult"]["audits"];
  let categories = &psi["lighthouseResult"]["categories"];
  let crux = &psi["loadingExperience"]["metrics"];

  DeviceMetrics {
    lcp: field(crux, "LARGEST_CONTENTFUL_PAINT_MS").or_else(|| lab(audits, "largest-contentful-paint")),
    // CrUX reports CLS multiplied by 100.
    cls: field(crux, "CUMULATIVE_LAYOUT_SHIFT_SCORE")
      .map(|p| p / 100.0)
      .or_else(|| lab(audits, "cumulative-layout-shift")),
    inp: field(crux, "INTERACTION_TO_NEXT_PAINT").or_else(|| lab(audits, "interaction-to-next-paint")),
    ttfb: lab(audits, "server-response-time"),
    page_size: lab(audits, "total-byte-weight").map(|bytes| (bytes / 1024.0).round()),
    performance_score: category(categories, "performance"),
    seo_score: category(categories, "seo"),
  }
}

/// Assemble a device-split record ready for `to_basic_inputs`.
pub fn device_split(url: &str, mobile: &DeviceMetrics, desktop: Option<&DeviceMetrics>) -> Value {
  let mut record = json!({ "url": url, "mobile": mobile });
  if let Some(desktop) = desktop {
    record["desktop"] = json!(desktop);
  }
  record
}
