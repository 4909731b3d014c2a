//! Counterexample detection for Echidna fuzzing reports.
//!
//! Echidna's JSON layout differs between versions, so nothing here assumes a
//! schema. Two independent rules contribute to the count:
//!
//! - the well-known top-level lists (`fails`, `failures`, `counterexamples`,
//!   `regressions`), when the document is an object;
//! - a recursive scan for any key starting with `counter` (case-insensitive)
//!   whose value is a list.
//!
//! The rules overlap. A top-level `counterexamples` list is counted by both, and
//! so is a counter-prefixed list nested inside a `fails` entry. The gate has
//! always behaved this way and CI thresholds depend on it.

use serde_json::Value;
use tracing::trace;

use crate::models::CounterexampleCount;

/// Top-level keys that hold one entry per failing property.
pub const KNOWN_LIST_KEYS: [&str; 4] = ["fails", "failures", "counterexamples", "regressions"];

/// Lower-cased key prefix picked up by the recursive scan.
pub const COUNTER_PREFIX: &str = "counter";

/// Count counterexamples in a parsed report.
pub fn count_counterexamples(report: &Value) -> CounterexampleCount {
    CounterexampleCount {
        top_level: count_known_lists(report),
        deep_scan: scan_counter_lists(report),
    }
}

/// Sum of the lengths of the well-known top-level lists. Zero for non-objects.
pub fn count_known_lists(report: &Value) -> u64 {
    let Some(map) = report.as_object() else {
        return 0;
    };

    KNOWN_LIST_KEYS
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_array))
        .map(|list| list.len() as u64)
        .sum()
}

/// Recursively sum the lengths of lists stored under counter-prefixed keys.
///
/// A matching list is counted but not descended into; every other value is.
pub fn scan_counter_lists(value: &Value) -> u64 {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, child)| match child {
                Value::Array(list) if is_counter_key(key) => {
                    trace!(key = %key, len = list.len(), "Counter-prefixed list");
                    list.len() as u64
                }
                _ => scan_counter_lists(child),
            })
            .sum(),
        Value::Array(items) => items.iter().map(scan_counter_lists).sum(),
        _ => 0,
    }
}

fn is_counter_key(key: &str) -> bool {
    key.to_lowercase().starts_with(COUNTER_PREFIX)
}
