//! Optional advisory text for scored routes
//!
//! Advice is produced by an `Advisor`, passed in explicitly by the caller.
//! The audit itself never needs one: without an advisor the report simply
//! carries no advice. `OpenAiAdvisor` talks to an OpenAI-compatible chat
//! completions endpoint; tests substitute their own implementation.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY`: Required by `OpenAiAdvisor::from_env`

mod client;
mod prompts;

pub use client::{
    API_KEY_ENV, AdviceConfig, DEFAULT_API_URL, DEFAULT_MODEL, Message, OpenAiAdvisor, Role,
};
pub use prompts::{SYSTEM_PROMPT, build_route_prompt};

use thiserror::Error;

use crate::route::ScoredRoute;

/// Default number of routes to request advice for.
pub const DEFAULT_ADVICE_LIMIT: usize = 5;

/// Errors that can occur while requesting advice
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("missing API key: {env_var} not set")]
    MissingApiKey { env_var: String },

    #[error("API request failed: {0}")]
    Request(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse API response: {0}")]
    Parse(String),
}

pub type AdviceResult<T> = Result<T, AdviceError>;

/// A source of modernization advice for a single route.
pub trait Advisor {
    /// Produce advice text for a scored route.
    fn advise(&self, route: &ScoredRoute) -> AdviceResult<String>;

    /// Short name used in logs (e.g., "openai").
    fn name(&self) -> &str;
}

/// Request advice for imperfect routes, in order, up to `limit` requests.
///
/// The result is index-aligned with `routes`. Routes scoring 100 and routes
/// past the limit get `None`. A failed request does not stop the run; its
/// error becomes the advice text.
pub fn advise_routes(
    routes: &[ScoredRoute],
    advisor: &dyn Advisor,
    limit: usize,
) -> Vec<Option<String>> {
    let mut remaining = limit;

    routes
        .iter()
        .map(|route| {
            if route.is_perfect() || remaining == 0 {
                return None;
            }
            remaining -= 1;

            tracing::debug!(
                advisor = advisor.name(),
                method = %route.route.method,
                path = %route.route.path,
                "requesting advice"
            );
            match advisor.advise(route) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!(advisor = advisor.name(), path = %route.route.path, error = %e, "advice request failed");
                    Some(format!("[AI ERROR] {}", e))
                }
            }
        })
        .collect()
}
