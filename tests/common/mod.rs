#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the artie binary.
#[macro_export]
macro_rules! artie {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("artie"))
    };
}

/// Configuration reporting every level, with thresholds low enough to
/// exercise all three labels.
pub const REPORT_ALL_CONFIG: &str = r#"{
  "includes": ["**/*.ts"],
  "excludes": ["**/node_modules/**"],
  "options": {
    "defaultThresholds": { "warning": 1, "critical": 3, "levels": ["OK", "WARNING", "CRITICAL"] },
    "metrics": {
      "cbo": { "enabled": true },
      "rfc": { "enabled": true },
      "lcom": { "enabled": true },
      "wmc": { "enabled": true, "warning": 5, "critical": 10 }
    }
  }
}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an `.artierc.json` with the given content.
    pub fn create_config(&self, content: &str) {
        self.create_file(".artierc.json", content);
    }

    /// Creates a minimal `tsconfig.json`.
    pub fn create_tsconfig(&self) {
        self.create_file(
            "tsconfig.json",
            "{\n  // project settings\n  \"compilerOptions\": { \"target\": \"ES2020\", },\n}\n",
        );
    }
}
