//! Common test utilities for integration tests.
//!
//! Question sets are written to a temporary directory so commands can be
//! exercised exactly as the binary runs them.

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use quiz_compare_cli::cli::QuestionSets;

/// Temporary directory holding a candidate and a reference file.
pub struct TestContext {
    dir: TempDir,
    pub sets: QuestionSets,
}

impl TestContext {
    /// Write both sets to disk.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created or written.
    pub fn new(candidates: &str, reference: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let candidates_path = dir.path().join("set1.txt");
        let reference_path = dir.path().join("set2.txt");
        fs::write(&candidates_path, candidates).expect("Failed to write candidate set");
        fs::write(&reference_path, reference).expect("Failed to write reference set");

        Self {
            dir,
            sets: QuestionSets {
                candidates: candidates_path,
                reference: reference_path,
            },
        }
    }

    /// Path inside the temporary directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
