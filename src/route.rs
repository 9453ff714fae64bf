//! Route declaration records
//!
//! A `RouteDeclaration` is produced once per matched decorator site and is
//! never mutated afterwards. Scoring wraps it in a `ScoredRoute`.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Path value used when no literal path argument could be resolved.
pub const UNKNOWN_PATH: &str = "UNKNOWN";

/// The HTTP verb named by a route decorator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
    Trace,
    /// Generic `.route(...)` decorator that does not name a verb
    Route,
}

impl HttpMethod {
    /// Parse a decorator attribute name (case-insensitive).
    /// Returns None if the name is not a recognized verb or `route`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            "options" => Some(Self::Options),
            "head" => Some(Self::Head),
            "trace" => Some(Self::Trace),
            "route" => Some(Self::Route),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Trace => "TRACE",
            Self::Route => "ROUTE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HttpMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single route decorator found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDeclaration {
    pub method: HttpMethod,
    /// Declared URL path, or `UNKNOWN_PATH`
    pub path: String,
    /// Source file, relative to the scanned root
    pub file: PathBuf,
    /// Path contains a `/v<digits>` segment
    pub versioned: bool,
    pub has_response_model: bool,
    pub has_tags: bool,
    pub has_summary: bool,
    pub has_description: bool,
    /// Text between the decorator's delimiting parentheses, trimmed
    pub decorator_args: String,
}

impl RouteDeclaration {
    /// True when the path fell back to the `UNKNOWN` sentinel.
    pub fn path_is_unknown(&self) -> bool {
        self.path == UNKNOWN_PATH
    }
}

/// A route declaration annotated with its maturity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRoute {
    #[serde(flatten)]
    pub route: RouteDeclaration,
    /// Maturity score in `[30, 100]`
    pub score: u32,
    /// Deficiency descriptions in rule-table order
    pub penalties: Vec<String>,
}

impl ScoredRoute {
    pub fn is_perfect(&self) -> bool {
        self.score == 100
    }
}
