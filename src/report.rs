//! Audit report model
//!
//! Collects scored routes, the repository score and tool metadata into a
//! single value that the Markdown, JSON and console writers render.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{AuditError, AuditResult};
use crate::route::ScoredRoute;
use crate::scan::{ScanConfig, extract};
use crate::scoring::{repository_score, score_all};

pub const TOOL_NAME: &str = "ModernAPI";
pub const FORMAL_NAME: &str = "API Modernization Audit (FastAPI)";
pub const RULESET: &str = "fastapi-core";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A scored route as it appears in reports, with optional advice.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    #[serde(flatten)]
    pub scored: ScoredRoute,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

/// The full result of auditing one repository.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Display name of the audited repository (its directory name)
    pub repository: String,
    /// Mean route score, rounded to one decimal place
    pub score: f64,
    /// Whether advice generation was enabled for this run
    pub ai_enabled: bool,
    pub generated_at: DateTime<Utc>,
    pub routes: Vec<RouteEntry>,
}

impl AuditReport {
    /// Build a report from scored routes.
    ///
    /// Fails with `AuditError::NoRoutes` when `routes` is empty.
    pub fn new(repository: impl Into<String>, routes: Vec<ScoredRoute>) -> AuditResult<Self> {
        let score = repository_score(&routes)?;
        Ok(Self {
            repository: repository.into(),
            score,
            ai_enabled: false,
            generated_at: Utc::now(),
            routes: routes
                .into_iter()
                .map(|scored| RouteEntry {
                    scored,
                    advice: None,
                })
                .collect(),
        })
    }

    /// Scan, score and summarize the repository at `root`.
    pub fn from_repository(root: &Path, config: &ScanConfig) -> AuditResult<Self> {
        if !root.is_dir() {
            return Err(AuditError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }
        let routes = score_all(extract(root, config));
        Self::new(repository_name(root), routes)
    }

    /// Attach advice produced by `advise_routes`, index-aligned with routes.
    pub fn attach_advice(&mut self, advice: Vec<Option<String>>) {
        self.ai_enabled = true;
        for (entry, text) in self.routes.iter_mut().zip(advice) {
            entry.advice = text;
        }
    }

    /// Scored routes in report order.
    pub fn scored_routes(&self) -> Vec<ScoredRoute> {
        self.routes.iter().map(|e| e.scored.clone()).collect()
    }

    pub fn routes_analyzed(&self) -> usize {
        self.routes.len()
    }

    pub fn perfect_routes(&self) -> usize {
        self.routes.iter().filter(|e| e.scored.is_perfect()).count()
    }

    pub fn needs_improvement(&self) -> usize {
        self.routes_analyzed() - self.perfect_routes()
    }
}

/// Directory name of `root`, falling back to its display form.
pub fn repository_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}
