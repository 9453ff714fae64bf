//! Source tree scanning
//!
//! Walks a repository in a stable, name-sorted order and runs the route
//! extractor over every file with a recognized suffix. Per-file extraction
//! can run in parallel; results are always concatenated in traversal order.

mod config;
mod utils;
mod walker;

pub use config::ScanConfig;
pub use utils::{glob_match, should_ignore_path};
pub use walker::{RouteScanner, extract};
