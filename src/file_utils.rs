//! Shared file reading utilities for extraction
//!
//! Suffix matching and size-limited reading of source files.

use std::path::Path;

/// Default recognized source-file suffix.
pub const DEFAULT_EXTENSION: &str = "py";

/// Normalize a configured suffix to its dotted form, e.g. `py` -> `.py`.
pub fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim().trim_start_matches('.'))
}

/// Check if a path's file name ends with one of `extensions`.
///
/// Matching is case-sensitive and textual, so `main.PY` is not a `py` file
/// while a file named just `.py` is. `extensions` may be given with or
/// without a leading dot.
pub fn has_recognized_suffix(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .map(|e| normalize_extension(e))
        .any(|suffix| suffix.len() > 1 && name.ends_with(&suffix))
}

/// Read a source file as UTF-8 text.
///
/// Returns `None` if:
/// - File is larger than `max_file_size` (when set)
/// - File cannot be read
/// - File is not valid UTF-8
pub fn read_source_file(path: &Path, max_file_size: Option<u64>) -> Option<String> {
    if let Some(limit) = max_file_size {
        if let Ok(metadata) = path.metadata() {
            if metadata.len() > limit {
                tracing::debug!(path = %path.display(), size = metadata.len(), "skipping oversized file");
                return None;
            }
        }
    }

    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable file");
            None
        }
    }
}
