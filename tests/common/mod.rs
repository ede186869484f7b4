// Test utility module for hintcheck integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project tree on disk.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(self, rel: &str, content: &str) -> Self {
        self.write(rel, content);
        self
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

pub const CLEAN: &str = "def add(x: int, y: int) -> int:\n    return x + y\n";

/// One clean function and one without a return annotation.
pub const HALF_CLEAN: &str = "def ok() -> None:\n    pass\n\n\ndef missing(x: int):\n    return x\n";

pub const BROKEN: &str = "def broken(x: int -> int:\n    return x\n";
