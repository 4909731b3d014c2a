use serde_json::json;
use tracing::info;

use crate::cli::commands::GateArgs;
use crate::cli::print_error;
use crate::echidna::count_counterexamples;
use crate::errors::AuditError;
use crate::models::GateVerdict;
use crate::utils::read_json_report;

pub const NOT_A_MAPPING: &str = "Echidna report not dict; cannot parse";

/// Count counterexamples in an Echidna report and print the gate result.
pub fn handle_gate(args: &GateArgs) -> Result<GateVerdict, AuditError> {
    info!(report = %args.report.display(), "Checking fuzzing report");
    let report = read_json_report(&args.report)?;

    if !report.is_object() {
        println!("{}", NOT_A_MAPPING);
    }

    let count = count_counterexamples(&report);
    info!(
        top_level = count.top_level,
        deep_scan = count.deep_scan,
        total = count.total(),
        "Counted counterexamples"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "counterexamples": count.total() }))?
    );

    let verdict = count.verdict();
    match verdict {
        GateVerdict::Pass => println!("No counterexamples found."),
        _ => print_error(&format!("Echidna found {} counterexamples.", count.total())),
    }

    Ok(verdict)
}
