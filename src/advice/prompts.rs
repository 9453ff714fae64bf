//! Prompt text for route advice

use crate::route::ScoredRoute;

pub const SYSTEM_PROMPT: &str =
    "You are a precise, pragmatic reviewer of FastAPI route definitions.";

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Build the user prompt describing one scored route.
pub fn build_route_prompt(route: &ScoredRoute) -> String {
    let r = &route.route;
    let issues = if route.penalties.is_empty() {
        "none".to_string()
    } else {
        route.penalties.join("; ")
    };

    format!(
        "Review this FastAPI route decorator and bring it in line with current best practice.

Route:
- Method: {method}
- Path: {path}
- File: {file}
- Score: {score}/100
- Versioned: {versioned}
- Has response_model: {response_model}
- Has tags: {tags}
- Has summary: {summary}
- Has description: {description}
- Detected issues: {issues}

Decorator arguments:
```
{args}
```

Reply with:
1. The specific problems
2. The recommended fixes
3. A complete rewritten decorator

Focus on versioning, response_model, tags, then summary and description.",
        method = r.method,
        path = r.path,
        file = r.file.display(),
        score = route.score,
        versioned = yes_no(r.versioned),
        response_model = yes_no(r.has_response_model),
        tags = yes_no(r.has_tags),
        summary = yes_no(r.has_summary),
        description = yes_no(r.has_description),
        issues = issues,
        args = r.decorator_args,
    )
}
