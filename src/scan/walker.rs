//! RouteScanner - collects route declarations across a source tree

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::extractors::Extractor;
use crate::extractors::routes::RouteExtractor;
use crate::route::RouteDeclaration;

use super::config::ScanConfig;
use super::utils::should_ignore_path;

/// Scan `root` with the given configuration.
///
/// Fails only by omission: unreadable files are skipped and a missing root
/// yields an empty sequence.
pub fn extract(root: &Path, config: &ScanConfig) -> Vec<RouteDeclaration> {
    RouteScanner::new(config.clone()).scan(root)
}

/// Walks a source tree and extracts route declarations from every
/// recognized file. Supports parallel extraction when parallel_workers != 1.
pub struct RouteScanner {
    config: ScanConfig,
    extractor: RouteExtractor,
}

impl RouteScanner {
    pub fn new(config: ScanConfig) -> Self {
        let extractor = RouteExtractor::new(config.extensions.clone(), config.max_file_size);
        Self { config, extractor }
    }

    /// Scan and return declarations in traversal order, then in order of
    /// appearance within each file.
    pub fn scan(&self, root: &Path) -> Vec<RouteDeclaration> {
        // Phase 1: collect candidate files in traversal order
        let files = self.collect_files(root);
        tracing::debug!(
            root = %root.display(),
            files = files.len(),
            extractor = self.extractor.name(),
            "collected candidate files"
        );

        // Phase 2: extract per file, then concatenate in collection order
        let extractor = &self.extractor;
        let extract_one = |path: &PathBuf| -> Vec<RouteDeclaration> {
            let relative = path.strip_prefix(root).unwrap_or(path.as_path());
            let routes = extractor.extract(path, relative).unwrap_or_default();
            if !routes.is_empty() {
                tracing::debug!(file = %relative.display(), routes = routes.len(), "found routes");
            }
            routes
        };

        let per_file: Vec<Vec<RouteDeclaration>> = match self.config.parallel_workers {
            1 => files.iter().map(extract_one).collect(),
            // Auto-detect: use rayon's default thread pool
            0 => files.par_iter().map(extract_one).collect(),
            workers => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => pool.install(|| files.par_iter().map(extract_one).collect()),
                Err(e) => {
                    // Fall back to rayon's global pool if custom pool creation fails
                    tracing::warn!(workers, error = %e, "failed to build thread pool");
                    files.par_iter().map(extract_one).collect()
                }
            },
        };

        per_file.into_iter().flatten().collect()
    }

    /// Enumerate files the extractor supports, siblings sorted by name.
    fn collect_files(&self, root: &Path) -> Vec<PathBuf> {
        let respect = self.config.respect_gitignore;
        let patterns = self.config.ignore_patterns.clone();

        let walker = WalkBuilder::new(root)
            .hidden(false)
            .ignore(respect)
            .git_ignore(respect)
            .git_global(respect)
            .git_exclude(respect)
            .parents(respect)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0 || !should_ignore_path(entry.path(), &patterns)
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && self.extractor.supports(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files
    }
}
