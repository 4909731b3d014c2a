//! Finding aggregation for Slither static-analysis reports.
//!
//! Only `results.detectors[*].findings[*]` is read. Any level that is missing
//! or has the wrong shape is treated as empty, so a malformed report yields an
//! empty summary instead of an error.

use serde_json::Value;
use tracing::debug;

use crate::models::{FindingsSummary, UNKNOWN_LABEL};

/// Tally every finding in the report by impact and by detector check.
pub fn summarize_findings(report: &Value) -> FindingsSummary {
    let mut summary = FindingsSummary::default();

    for detector in detectors(report) {
        let kind = detector_type(detector);
        let findings = detector
            .get("findings")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        debug!(detector = %kind, findings = findings.len(), "Detector");
        for finding in findings {
            summary.record(&label(finding.get("impact")), &kind);
        }
    }

    summary
}

fn detectors(report: &Value) -> &[Value] {
    report
        .get("results")
        .and_then(|results| results.get("detectors"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// `check`, then `name`, then `unknown`. Falls back only when a key is absent.
fn detector_type(detector: &Value) -> String {
    let field = detector.get("check").or_else(|| detector.get("name"));
    label(field)
}

/// Strings are used verbatim; other JSON values by their compact JSON text.
fn label(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN_LABEL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
