//! score-compare: recompute a saved report's score and check it against the
//! persisted value.
//!
//! Usage:
//!   score-compare <report.json>       # print breakdown, exit 1 on mismatch
//!   score-compare <report.json> -q    # quiet: exit 0 if consistent, 1 if not
//!
//! The report file is the raw record the engine accepts plus the persisted
//! `score` integer. Use in CI or when a stored score looks stale.

use std::env;
use std::fs;
use std::process;

use score_engine::{run, ScoreReport};

#[derive(serde::Deserialize, Default)]
struct Persisted {
    #[serde(default)]
    score: Option<i64>,
}

fn load_report(path: &str) -> (serde_json::Value, i64) {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("score-compare: cannot read {}: {}", path, e);
        process::exit(2);
    });
    let raw: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("score-compare: invalid JSON in {}: {}", path, e);
        process::exit(2);
    });
    let persisted: Persisted = serde_json::from_value(raw.clone()).unwrap_or_default();
    let Some(stored) = persisted.score else {
        eprintln!("score-compare: {} has no integer `score` field", path);
        process::exit(2);
    };
    (raw, stored)
}

/// Signed difference recomputed - stored; zero means consistent.
fn drift(stored: i64, report: &ScoreReport) -> i64 {
    i64::from(report.score.final_score) - stored
}

fn print_breakdown(report: &ScoreReport) {
    let s = &report.score;
    println!("fingerprint  {}", report.fingerprint);
    println!(
        "subscores    cwv {:.1}  weight {:.1}  ttfb {:.1}  mobile {:.1}  seo {:.1}",
        s.subscores.cwv, s.subscores.weight, s.subscores.ttfb, s.subscores.mobile, s.subscores.seo
    );
    println!(
        "pipeline     raw {:.1} -> gates {:.1} (cap {}) -> penalties {:.1} -> final {}",
        s.raw, s.after_gates, s.gates.cap, s.after_penalties, s.final_score
    );
    for reason in &s.gates.reasons {
        println!("gate         {}", reason);
    }
    for p in &s.penalties {
        println!("penalty      {} {} ({})", p.pts, p.reason, p.id);
    }
    println!("label        {}", s.label.as_emoji());
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let files: Vec<_> = args.iter().skip(1).filter(|a| !a.starts_with('-')).collect();

    if files.len() != 1 {
        eprintln!("Usage: score-compare <report.json> [-q|--quiet]");
        eprintln!("  -q  Quiet: only exit code (0=consistent, 1=mismatch)");
        process::exit(2);
    }

    let (raw, stored) = load_report(files[0]);
    let report = run(&raw);
    let diff = drift(stored, &report);

    if quiet {
        process::exit(if diff == 0 { 0 } else { 1 });
    }

    print_breakdown(&report);
    println!("stored       {}", stored);
    if diff == 0 {
        println!("Scores consistent.");
        process::exit(0);
    }
    println!("Mismatch: recomputed {} ({:+})", report.score.final_score, diff);
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_is_recomputed_minus_stored() {
        let raw = serde_json::json!({"lcpMobile": 2100, "url": "https://hotel.example"});
        let report = run(&raw);
        let recomputed = i64::from(report.score.final_score);
        assert_eq!(drift(recomputed, &report), 0);
        assert_eq!(drift(recomputed - 5, &report), 5);
    }

    #[test]
    fn persisted_score_ignores_other_fields() {
        let raw = serde_json::json!({"score": 80, "lcpMobile": 3000});
        let persisted: Persisted = serde_json::from_value(raw).unwrap();
        assert_eq!(persisted.score, Some(80));
    }
}
