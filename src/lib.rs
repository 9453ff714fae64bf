//! ModernAPI - audits web-framework route declarations against a maturity rubric

pub mod advice;
pub mod error;
pub mod extractors;
pub mod file_utils;
pub mod output;
pub mod report;
pub mod route;
pub mod scan;
pub mod scoring;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use advice::{AdviceConfig, AdviceError, Advisor, OpenAiAdvisor, advise_routes};
pub use error::{AuditError, AuditResult};
pub use extractors::routes::{extract_routes_from_content, parse_declaration};
pub use output::{ColorMode, OutputConfig, print_summary, write_json, write_markdown};
pub use report::{AuditReport, RouteEntry};
pub use route::{HttpMethod, RouteDeclaration, ScoredRoute, UNKNOWN_PATH};
pub use scan::{RouteScanner, ScanConfig, extract};
pub use scoring::{repository_score, score, score_all};
