/// Exit code when a fuzzing report carries counterexamples.
pub const EXIT_COUNTEREXAMPLES: i32 = 20;
/// Exit code when a static-analysis report carries high-severity findings.
pub const EXIT_HIGH_SEVERITY: i32 = 10;

/// Outcome of applying a CI gate to a fully parsed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateVerdict {
    /// Nothing in the report violates the gate.
    Pass,
    /// The fuzzer produced this many counterexamples.
    Counterexamples(u64),
    /// The static analyser reported this many high-impact findings.
    HighSeverity(u64),
}

impl GateVerdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, GateVerdict::Pass)
    }

    /// Process exit code for this verdict. Distinct from the error exit codes so
    /// CI can tell a broken report apart from a report with real issues.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateVerdict::Pass => 0,
            GateVerdict::Counterexamples(_) => EXIT_COUNTEREXAMPLES,
            GateVerdict::HighSeverity(_) => EXIT_HIGH_SEVERITY,
        }
    }
}
