//! Route decorator extraction
//!
//! Finds decorator-style route declarations such as `@app.get("/v1/items")`
//! or `@router.post(path="/orders", response_model=Order)` in raw source text.
//!
//! # Approach
//!
//! This is a lightweight scan over the file's text, not a parser:
//!
//! 1. A regex locates `@<name>.<verb>(` sites.
//! 2. The argument list is delimited by counting parenthesis depth from the
//!    opening parenthesis, so nested calls and multi-line lists are handled.
//! 3. Fields are pulled out of the argument text with small keyword regexes.
//!
//! Parentheses inside string literals are counted like any others. Malformed
//! input degrades (an unclosed list runs to end of file) but never fails.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::Extractor;
use crate::file_utils::{has_recognized_suffix, read_source_file};
use crate::route::{HttpMethod, RouteDeclaration, UNKNOWN_PATH};

/// `@<identifier>.<verb>(`, with optional whitespace before the parenthesis.
static ROUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@\w+\.(get|post|put|patch|delete|options|head|trace|route)\s*\(")
        .expect("ROUTE_PATTERN regex is invalid")
});

/// `path="..."` or `path='...'` anywhere in the argument text, including as
/// the tail of a longer name such as `file_path=`.
static PATH_KWARG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"path\s*=\s*["']([^"']+)["']"#).expect("PATH_KWARG_PATTERN regex is invalid")
});

/// A quoted literal at the very start of the argument text.
static LEADING_LITERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*["']([^"']+)["']"#).expect("LEADING_LITERAL_PATTERN regex is invalid")
});

/// A `/v<digits>` segment anywhere in a path.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/v\d+").expect("VERSION_PATTERN regex is invalid"));

/// Keyword-assignment patterns for the scored decorator attributes.
struct KeywordPatterns {
    response_model: Regex,
    tags: Regex,
    summary: Regex,
    description: Regex,
}

static KEYWORDS: LazyLock<KeywordPatterns> = LazyLock::new(|| KeywordPatterns {
    response_model: keyword_pattern("response_model"),
    tags: keyword_pattern("tags"),
    summary: keyword_pattern("summary"),
    description: keyword_pattern("description"),
});

fn keyword_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"{}\s*=", regex::escape(name)))
        .expect("keyword pattern regex is invalid")
}

/// Extract all route declarations from a source file.
///
/// `relative` is recorded as the declaration's file and should be the path
/// relative to the scanned root. Returns `None` if the file cannot be read
/// or decoded, or exceeds `max_file_size`.
pub fn extract_routes(
    path: &Path,
    relative: &Path,
    max_file_size: Option<u64>,
) -> Option<Vec<RouteDeclaration>> {
    let content = read_source_file(path, max_file_size)?;
    Some(extract_routes_from_content(&content, relative))
}

/// Extract route declarations from file content, in order of appearance.
pub fn extract_routes_from_content(content: &str, file: &Path) -> Vec<RouteDeclaration> {
    let mut routes = Vec::new();

    for caps in ROUTE_PATTERN.captures_iter(content) {
        let (Some(site), Some(verb)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(method) = HttpMethod::parse(verb.as_str()) else {
            continue;
        };

        let args = argument_text(content, site.end());
        routes.push(parse_declaration(method, args, file));
    }

    routes
}

/// Build a declaration from a decorator's argument text.
pub fn parse_declaration(method: HttpMethod, args: &str, file: &Path) -> RouteDeclaration {
    let args = args.trim();
    let path = resolve_path(args).unwrap_or(UNKNOWN_PATH).to_string();
    let keywords = &*KEYWORDS;

    RouteDeclaration {
        method,
        versioned: is_versioned(&path),
        path,
        file: file.to_path_buf(),
        has_response_model: keywords.response_model.is_match(args),
        has_tags: keywords.tags.is_match(args),
        has_summary: keywords.summary.is_match(args),
        has_description: keywords.description.is_match(args),
        decorator_args: args.to_string(),
    }
}

/// Return the text between the parenthesis opened just before `start` and
/// its matching close. An unclosed list runs to the end of `content`.
pub fn argument_text(content: &str, start: usize) -> &str {
    let end = find_closing_paren(content, start).unwrap_or(content.len());
    &content[start..end]
}

/// Byte offset of the closing parenthesis, scanning with depth starting at 1.
fn find_closing_paren(content: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, byte) in content.as_bytes().get(start..)?.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Resolve the declared path: a `path=` keyword first, then a leading literal.
///
/// The leading-literal fallback is applied to every decorator form, including
/// generic `.route(...)`, so a first positional string is taken as the path
/// even where the framework would not treat it as one.
pub fn resolve_path(args: &str) -> Option<&str> {
    PATH_KWARG_PATTERN
        .captures(args)
        .or_else(|| LEADING_LITERAL_PATTERN.captures(args))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check whether a path contains a `/v<digits>` version segment.
pub fn is_versioned(path: &str) -> bool {
    VERSION_PATTERN.is_match(path)
}

/// Route extractor that implements the Extractor trait.
#[derive(Debug, Clone)]
pub struct RouteExtractor {
    extensions: Vec<String>,
    max_file_size: Option<u64>,
}

impl RouteExtractor {
    pub fn new(extensions: Vec<String>, max_file_size: Option<u64>) -> Self {
        Self {
            extensions,
            max_file_size,
        }
    }
}

impl Extractor for RouteExtractor {
    type Output = Vec<RouteDeclaration>;

    fn extract(&self, path: &Path, relative: &Path) -> Option<Self::Output> {
        extract_routes(path, relative, self.max_file_size)
    }

    fn supports(&self, path: &Path) -> bool {
        has_recognized_suffix(path, &self.extensions)
    }

    fn name(&self) -> &'static str {
        "routes"
    }
}
