//! Route maturity scoring
//!
//! Each route starts at 100 and loses points for every rule it violates.
//! Rules are evaluated independently, in table order, and the result is
//! floored at `MIN_SCORE`.

use crate::error::{AuditError, AuditResult};
use crate::route::{RouteDeclaration, ScoredRoute};

/// Score every route starts from.
pub const BASE_SCORE: u32 = 100;

/// Lowest score a detected route can receive.
pub const MIN_SCORE: u32 = 30;

/// A single scoring rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Points subtracted when the rule is violated
    pub penalty: u32,
    /// Deficiency description recorded in `ScoredRoute::penalties`
    pub description: &'static str,
    /// Remediation hint shown in reports
    pub hint: &'static str,
    satisfied: fn(&RouteDeclaration) -> bool,
}

impl Rule {
    /// Check whether the route satisfies this rule.
    pub fn is_satisfied(&self, route: &RouteDeclaration) -> bool {
        (self.satisfied)(route)
    }
}

/// The rule table. Order determines penalty order in every report.
pub static RULES: [Rule; 5] = [
    Rule {
        penalty: 20,
        description: "missing API versioning",
        hint: "prefix the path with a version segment such as /v1/ or /v2/",
        satisfied: |r: &RouteDeclaration| r.versioned,
    },
    Rule {
        penalty: 25,
        description: "missing response/result-type declaration",
        hint: "declare response_model= for typed responses and accurate docs",
        satisfied: |r: &RouteDeclaration| r.has_response_model,
    },
    Rule {
        penalty: 10,
        description: "missing grouping metadata",
        hint: "add tags= so the endpoint is grouped in the OpenAPI schema",
        satisfied: |r: &RouteDeclaration| r.has_tags,
    },
    Rule {
        penalty: 10,
        description: "missing short title",
        hint: "add summary= to give the endpoint a title",
        satisfied: |r: &RouteDeclaration| r.has_summary,
    },
    Rule {
        penalty: 5,
        description: "missing long-form description",
        hint: "add description= with details about behaviour and errors",
        satisfied: |r: &RouteDeclaration| r.has_description,
    },
];

/// Look up the rule that produced a penalty description.
pub fn rule_for_penalty(description: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.description == description)
}

/// Score a single route declaration.
pub fn score(route: RouteDeclaration) -> ScoredRoute {
    let mut deduction = 0;
    let mut penalties = Vec::new();

    for rule in &RULES {
        if !rule.is_satisfied(&route) {
            deduction += rule.penalty;
            penalties.push(rule.description.to_string());
        }
    }

    ScoredRoute {
        route,
        score: BASE_SCORE.saturating_sub(deduction).max(MIN_SCORE),
        penalties,
    }
}

/// Score a sequence of routes, preserving order.
pub fn score_all(routes: Vec<RouteDeclaration>) -> Vec<ScoredRoute> {
    routes.into_iter().map(score).collect()
}

/// Mean route score, rounded to one decimal place.
///
/// Rounding is applied to the binary value of the mean, so `30.05` (stored
/// just above) becomes `30.1` and `30.15` (stored just below) becomes `30.1`.
///
/// Returns `AuditError::NoRoutes` for an empty sequence, since an average
/// over nothing would be misleading.
pub fn repository_score(routes: &[ScoredRoute]) -> AuditResult<f64> {
    if routes.is_empty() {
        return Err(AuditError::NoRoutes);
    }
    let total: u64 = routes.iter().map(|r| u64::from(r.score)).sum();
    let mean = total as f64 / routes.len() as f64;
    Ok(format!("{:.1}", mean).parse().unwrap_or(mean))
}
