use tracing::{info, warn};

use crate::cli::commands::SummaryArgs;
use crate::cli::print_error;
use crate::errors::AuditError;
use crate::models::GateVerdict;
use crate::reporting::format_summary_markdown;
use crate::slither::summarize_findings;
use crate::utils::{atomic_write, read_json_report};

/// Summarize a Slither report, gate on high severity, then write the outputs.
///
/// A tripped gate returns before anything is written, so a failing build never
/// leaves a summary behind.
pub fn handle_summary(args: &SummaryArgs) -> Result<GateVerdict, AuditError> {
    info!(input = %args.input.display(), "Summarizing static-analysis report");
    let report = read_json_report(&args.input)?;
    let summary = summarize_findings(&report);

    info!(
        total = summary.total_issues,
        severities = summary.by_severity.len(),
        types = summary.by_type.len(),
        "Aggregated findings"
    );

    let verdict = summary.verdict();
    if let GateVerdict::HighSeverity(high) = verdict {
        warn!(high, "High-severity gate tripped, skipping outputs");
        print_error(&format!("{} high-severity issues found.", high));
        return Ok(verdict);
    }

    let json = serde_json::to_string_pretty(&summary)?;
    atomic_write(&args.output, &json)?;
    info!(path = %args.output.display(), "Summary written");
    println!("{}", json);

    let markdown = args
        .markdown
        .as_ref()
        .filter(|path| !path.as_os_str().is_empty());
    if let Some(md_path) = markdown {
        atomic_write(md_path, &format_summary_markdown(&summary))?;
        info!(path = %md_path.display(), "Markdown summary written");
    }

    Ok(verdict)
}
