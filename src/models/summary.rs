use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::verdict::GateVerdict;

/// Severity label that trips the findings gate.
pub const HIGH_SEVERITY: &str = "high";
/// Label used when a finding has no impact or a detector has no check/name.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Findings tallied by severity and by detector type.
///
/// Both maps keep labels in the order they were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsSummary {
    pub total_issues: u64,
    pub by_severity: IndexMap<String, u64>,
    pub by_type: IndexMap<String, u64>,
}

impl FindingsSummary {
    /// Count one finding under its severity and type labels.
    pub fn record(&mut self, severity: &str, kind: &str) {
        self.total_issues += 1;
        *self.by_severity.entry(severity.to_string()).or_insert(0) += 1;
        *self.by_type.entry(kind.to_string()).or_insert(0) += 1;
    }

    pub fn high_count(&self) -> u64 {
        self.by_severity.get(HIGH_SEVERITY).copied().unwrap_or(0)
    }

    pub fn verdict(&self) -> GateVerdict {
        match self.high_count() {
            0 => GateVerdict::Pass,
            n => GateVerdict::HighSeverity(n),
        }
    }
}
