//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is one raw measurement record. Output lines are either:
//! - A ScoreReport (fingerprint, normalized inputs, score breakdown)
//! - An ErrorOutput (when the line is not valid JSON)

use score_engine::types::ErrorOutput;
use score_engine::{run, telemetry, Config, EngineError};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, warn};

fn main() {
  let config = match Config::from_env() {
    Ok(c) => c,
    Err(e) => {
      let _ = writeln!(io::stderr(), "score-engine: {}", e);
      std::process::exit(2);
    }
  };
  if let Err(e) = telemetry::init(&config) {
    let _ = writeln!(io::stderr(), "score-engine: {}", e);
    std::process::exit(2);
  }

  if let Err(e) = run_stream(&config) {
    error!(error = %e, "stream aborted");
    std::process::exit(1);
  }
}

fn run_stream(config: &Config) -> Result<(), EngineError> {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for (idx, line) in stdin.lock().lines().enumerate() {
    let line = line?;
    let line_no = idx + 1;

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let raw: serde_json::Value = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        warn!(line = line_no, error = %e, "invalid JSON record");
        let err = ErrorOutput::new(format!("json parse: {}", e)).at_line(line_no);
        write_line(&mut out, &err, config.pretty)?;
        continue;
      }
    };

    let mut report = run(&raw);
    debug!(
      line = line_no,
      fingerprint = %report.fingerprint,
      final_score = report.score.final_score,
      label = report.score.label.as_emoji(),
      "record scored"
    );
    if !config.include_inputs {
      report = report.without_inputs();
    }
    write_line(&mut out, &report, config.pretty)?;
  }

  out.flush()?;
  Ok(())
}

fn write_line<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<(), EngineError> {
  if pretty {
    serde_json::to_writer_pretty(&mut *out, value)?;
  } else {
    serde_json::to_writer(&mut *out, value)?;
  }
  writeln!(out)?;
  Ok(())
}
