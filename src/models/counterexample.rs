use super::verdict::GateVerdict;

/// Counterexamples found in a fuzzing report, split by the rule that found them.
///
/// The two parts are additive and never deduplicated: a counter-prefixed list
/// nested under one of the well-known top-level keys is counted by both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterexampleCount {
    /// Sum of the lengths of the well-known top-level lists.
    pub top_level: u64,
    /// Sum of the lengths of counter-prefixed lists found anywhere in the document.
    pub deep_scan: u64,
}

impl CounterexampleCount {
    pub fn total(&self) -> u64 {
        self.top_level + self.deep_scan
    }

    pub fn verdict(&self) -> GateVerdict {
        match self.total() {
            0 => GateVerdict::Pass,
            n => GateVerdict::Counterexamples(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_parts() {
        let count = CounterexampleCount { top_level: 2, deep_scan: 3 };
        assert_eq!(count.total(), 5);
    }

    #[test]
    fn test_zero_count_passes() {
        assert_eq!(CounterexampleCount::default().verdict(), GateVerdict::Pass);
    }

    #[test]
    fn test_positive_count_fails() {
        let count = CounterexampleCount { top_level: 0, deep_scan: 1 };
        assert_eq!(count.verdict(), GateVerdict::Counterexamples(1));
    }
}
