//! Report formatting and display
//!
//! - `markdown` - Markdown report file
//! - `json` - JSON report file
//! - `summary` - colored console score summary

mod config;
mod json;
mod markdown;
mod summary;

pub use config::{ColorMode, OutputConfig};
pub use json::{render_json, write_json};
pub use markdown::{render_markdown, write_markdown};
pub use summary::{print_summary, write_summary};
