//! Test utilities for creating temporary source trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary source tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a FastAPI-style module with `count` routes, alternating between
    /// fully documented and bare declarations.
    pub fn add_route_module(&self, path: &str, count: usize) -> PathBuf {
        let mut content = String::from("from fastapi import APIRouter\n\nrouter = APIRouter()\n\n");
        for i in 0..count {
            if i % 2 == 0 {
                content.push_str(&format!(
                    "@router.get(\n    \"/v1/items/{i}\",\n    response_model=Item,\n    tags=[\"items\"],\n    summary=\"Item {i}\",\n    description=\"Fetch item {i}\",\n)\nasync def item_{i}():\n    return get_item({i})\n\n"
                ));
            } else {
                content.push_str(&format!(
                    "@router.post(\"/items/{i}\")\nasync def create_{i}(payload: dict = Body(...)):\n    return payload\n\n"
                ));
            }
        }
        self.add_file(path, &content)
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
