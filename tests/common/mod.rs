//! Shared test utilities for the CLI end-to-end tests.
//!
//! Add `mod common;` to a test file, then use the prelude:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().args(["output", "set", "KEY", "value"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Variables the binary reads that must not leak in from the environment
/// running the tests.
const ISOLATED_VARS: &[&str] = &[
    "DRONE_OUTPUT",
    "HARNESS_OUTPUT_SECRET_FILE",
    "ERROR_METADATA_FILE",
    "PLUGIN_LOG_LEVEL",
];

/// A temporary directory holding the output files of one test.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file inside the fixture.
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Content of a file inside the fixture.
    #[allow(dead_code)]
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.file(name)).expect("Failed to read file")
    }

    /// Create a command running in this fixture's directory with the output
    /// variables cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ci-plugin-env");
        cmd.current_dir(self.path());
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file("out.env", "A=1\n");
        assert_eq!(fixture.read("out.env"), "A=1\n");
    }
}
