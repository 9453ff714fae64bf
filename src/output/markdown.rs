//! Markdown report formatting
//!
//! Renders an `AuditReport` as a standalone Markdown document, suitable for
//! committing next to the audited code or attaching to a pull request.

use std::io;
use std::path::Path;

use crate::report::{AuditReport, FORMAL_NAME, RULESET, RouteEntry, TOOL_NAME, TOOL_VERSION};
use crate::scoring::rule_for_penalty;

/// Render the report as Markdown.
pub fn render_markdown(report: &AuditReport) -> String {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push_str(&render_summary(report));
    for entry in &report.routes {
        md.push_str(&render_route(entry));
    }

    md
}

/// Render the report and write it to `path`.
pub fn write_markdown(report: &AuditReport, path: &Path) -> io::Result<()> {
    std::fs::write(path, render_markdown(report))
}

fn render_header(report: &AuditReport) -> String {
    let timestamp = report.generated_at.format("%Y-%m-%d %H:%M UTC");
    let ai = if report.ai_enabled {
        "Enabled"
    } else {
        "Disabled"
    };

    format!(
        "# {TOOL_NAME}\n\
         ## {FORMAL_NAME}\n\n\
         **Tool Version:** {TOOL_VERSION}  \n\
         **Ruleset:** {RULESET}  \n\
         **AI Advice:** {ai}  \n\
         **Repository:** `{}`  \n\
         **Generated:** {timestamp}\n\n\
         ---\n\n",
        report.repository
    )
}

fn render_summary(report: &AuditReport) -> String {
    format!(
        "## API Maturity Score\n\n\
         **Overall Score: {:.1}/100**\n\n\
         Routes analyzed: {}\n\
         Perfect routes: {}\n\
         Needs improvement: {}\n\n\
         ---\n\n",
        report.score,
        report.routes_analyzed(),
        report.perfect_routes(),
        report.needs_improvement()
    )
}

fn render_route(entry: &RouteEntry) -> String {
    let scored = &entry.scored;
    let route = &scored.route;
    let mut md = String::new();

    md.push_str(&format!("### `{} {}`\n", route.method, route.path));
    md.push_str(&format!("- **File:** `{}`\n", route.file.display()));
    md.push_str(&format!("- **Score:** {}/100\n", scored.score));

    if scored.penalties.is_empty() {
        md.push_str("- **Issues:** None 🎉\n\n");
    } else {
        md.push_str(&format!("- **Issues:** {}\n", scored.penalties.join(", ")));
        md.push_str("- **Suggested fixes:**\n");
        for hint in scored
            .penalties
            .iter()
            .filter_map(|p| rule_for_penalty(p))
            .map(|rule| rule.hint)
        {
            md.push_str(&format!("  - {}\n", hint));
        }
        md.push('\n');
    }

    if let Some(ref advice) = entry.advice {
        md.push_str("**Recommended Modernization:**\n\n");
        md.push_str("```\n");
        md.push_str(advice);
        md.push_str("\n```\n\n");
    }

    md.push_str("---\n\n");
    md
}
