//! Source extractors
//!
//! An extractor turns one source file into structured records. The scan
//! walker asks each extractor whether it supports a path, then runs it on
//! every supported file, possibly in parallel.
//!
//! Currently there is a single extractor, `routes`, for decorator-style
//! route declarations.

pub mod routes;

use std::path::Path;

/// Base trait for all source extractors.
pub trait Extractor {
    /// The output type produced by this extractor.
    type Output;

    /// Extract records from the file at `path`.
    ///
    /// `relative` is the same file relative to the scan root, used for
    /// attribution in the produced records.
    ///
    /// Returns `None` if the file cannot be read or decoded.
    fn extract(&self, path: &Path, relative: &Path) -> Option<Self::Output>;

    /// Check if this extractor should run on the given path.
    fn supports(&self, path: &Path) -> bool;

    /// Get a descriptive name for this extractor (e.g., "routes").
    fn name(&self) -> &'static str;
}
