//! Configuration types for the scan walker

use crate::file_utils::DEFAULT_EXTENSION;

/// Configuration for repository scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Recognized source-file suffixes, with or without a leading dot
    pub extensions: Vec<String>,
    /// Honour .gitignore, .ignore and git exclude files
    pub respect_gitignore: bool,
    /// Glob patterns matched against file and directory names
    pub ignore_patterns: Vec<String>,
    /// Number of parallel workers for route extraction.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
    /// Skip files larger than this many bytes
    pub max_file_size: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            respect_gitignore: false,
            ignore_patterns: Vec::new(),
            parallel_workers: 0,
            max_file_size: None,
        }
    }
}
