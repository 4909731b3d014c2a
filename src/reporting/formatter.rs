use indexmap::IndexMap;

use crate::models::FindingsSummary;

pub const REPORT_HEADING: &str = "## Slither Security Analysis Summary";

/// Render the Markdown companion to the JSON summary.
///
/// Bullets follow first-seen label order. Blank lines and the closing rule are
/// part of the format.
pub fn format_summary_markdown(summary: &FindingsSummary) -> String {
    let mut md = vec![format!("{}\n", REPORT_HEADING)];
    md.push(format!("**Total Issues:** {}", summary.total_issues));
    md.push("\n**By Severity:**\n".to_string());
    md.extend(bullets(&summary.by_severity));
    md.push("\n**By Type:**\n".to_string());
    md.extend(bullets(&summary.by_type));
    md.push("\n---\n".to_string());
    md.join("\n")
}

fn bullets(counts: &IndexMap<String, u64>) -> impl Iterator<Item = String> + '_ {
    counts.iter().map(|(label, count)| format!("- {}: {}", label, count))
}
