//! Core types for the score engine (JSON contracts + score breakdown).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Canonical scoring input
// ---------------------------------------------------------------------------

/// Canonical scoring input. Every field is optional: absence means "unknown",
/// never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInputs {
  #[serde(rename = "LCP_ms", default, skip_serializing_if = "Option::is_none")]
  pub lcp_ms: Option<f64>,
  #[serde(rename = "INP_ms", default, skip_serializing_if = "Option::is_none")]
  pub inp_ms: Option<f64>,
  #[serde(rename = "CLS", default, skip_serializing_if = "Option::is_none")]
  pub cls: Option<f64>,
  #[serde(rename = "TTFB_ms", default, skip_serializing_if = "Option::is_none")]
  pub ttfb_ms: Option<f64>,
  #[serde(rename = "pageWeight_kb", default, skip_serializing_if = "Option::is_none")]
  pub page_weight_kb: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub requests: Option<f64>,
  #[serde(rename = "mobileReady", default)]
  pub mobile_ready: MobileReady,
  #[serde(rename = "seoKey", default)]
  pub seo_key: SeoKey,
  #[serde(
    rename = "hasBlockingThirdParty",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub has_blocking_third_party: Option<bool>,
}

/// Mobile UX checks. `None` is treated as passing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileReady {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub viewport_meta: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tap_targets_ok: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cta_above_fold: Option<bool>,
}

/// Key SEO checks. `None` is treated as passing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoKey {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub indexable: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub https: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title_ok: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta_ok: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub h1_unique: Option<bool>,
}

// ---------------------------------------------------------------------------
// Score breakdown
// ---------------------------------------------------------------------------

/// Score ceiling plus every reason that lowered it, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateResult {
  pub cap: u8,
  pub reasons: Vec<String>,
}

impl GateResult {
  /// No gate fired yet.
  pub fn open() -> Self {
    Self {
      cap: 100,
      reasons: Vec::new(),
    }
  }

  /// Lower the ceiling to `cap` (never raises it) and record why.
  pub fn restrict(&mut self, cap: u8, reason: &str) {
    self.cap = self.cap.min(cap);
    self.reasons.push(reason.to_string());
  }

  pub fn is_clear(&self) -> bool {
    self.reasons.is_empty()
  }
}

/// Soft additive deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Penalty {
  pub id: String,
  pub pts: i32,
  pub reason: String,
}

/// The five category scores, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Subscores {
  pub cwv: f64,
  pub weight: f64,
  pub ttfb: f64,
  pub mobile: f64,
  pub seo: f64,
}

/// Traffic-light verdict shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
  #[serde(rename = "🟢")]
  Green,
  #[serde(rename = "🟡")]
  Yellow,
  #[serde(rename = "🔴")]
  Red,
}

impl Label {
  /// Green needs both a high score and no fired gate; yellow and red look at
  /// the score only.
  pub fn classify(final_score: u8, gates_clear: bool) -> Self {
    if final_score >= 88 && gates_clear {
      Self::Green
    } else if final_score >= 70 {
      Self::Yellow
    } else {
      Self::Red
    }
  }

  pub fn as_emoji(self) -> &'static str {
    match self {
      Self::Green => "🟢",
      Self::Yellow => "🟡",
      Self::Red => "🔴",
    }
  }
}

/// Full, explainable result of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetail {
  pub raw: f64,
  pub after_gates: f64,
  pub after_penalties: f64,
  #[serde(rename = "final")]
  pub final_score: u8,
  pub gates: GateResult,
  pub penalties: Vec<Penalty>,
  pub subscores: Subscores,
  pub label: Label,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// One output line: the score plus what it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
  /// Stable digest of the normalized inputs.
  pub fingerprint: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inputs: Option<BasicInputs>,
  pub score: ScoreDetail,
}

impl ScoreReport {
  pub fn without_inputs(mut self) -> Self {
    self.inputs = None;
    self
  }
}

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub line: Option<usize>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      line: None,
    }
  }

  pub fn at_line(mut self, line: usize) -> Self {
    self.line = Some(line);
    self
  }
}
