//! JSON report formatting

use std::path::Path;

use serde::Serialize;

use crate::error::AuditResult;
use crate::report::{AuditReport, RULESET, RouteEntry, TOOL_NAME, TOOL_VERSION};

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    ruleset: &'static str,
    repository: &'a str,
    score: f64,
    routes_analyzed: usize,
    timestamp: String,
    routes: &'a [RouteEntry],
}

impl<'a> From<&'a AuditReport> for JsonReport<'a> {
    fn from(report: &'a AuditReport) -> Self {
        Self {
            tool: TOOL_NAME,
            version: TOOL_VERSION,
            ruleset: RULESET,
            repository: &report.repository,
            score: report.score,
            routes_analyzed: report.routes_analyzed(),
            timestamp: report.generated_at.to_rfc3339(),
            routes: &report.routes,
        }
    }
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AuditReport) -> AuditResult<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
}

/// Render the report and write it to `path`.
pub fn write_json(report: &AuditReport, path: &Path) -> AuditResult<()> {
    std::fs::write(path, render_json(report)?)?;
    Ok(())
}
