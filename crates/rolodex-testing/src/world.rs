//! TestWorld pattern for declarative integration test setup.
//!
//! Provides an isolated data directory and a batch file standing in for the
//! remote API, and configures CLI commands to use both.

use anyhow::Result;
use assert_cmd::Command;
use rolodex_types::Batch;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use rolodex_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    batch_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Isolated environment serving the twelve sample profiles.
    pub fn new() -> Self {
        Self::with_batch(&fixtures::sample_batch())
    }

    /// Isolated environment serving `batch`.
    pub fn with_batch(batch: &Batch) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".rolodex");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let batch_path = fixtures::write_batch(temp_dir.path(), "batch.json", batch)
            .expect("Failed to write batch file");

        Self {
            temp_dir,
            data_dir,
            batch_path,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn batch_path(&self) -> &Path {
        &self.batch_path
    }

    /// Write a config file into the data dir.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this environment's data dir and batch file.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--source-file")
            .arg(self.batch_path())
            .env_remove("RUST_LOG")
            .env_remove("ROLODEX_PATH");
        cmd
    }

    /// Run the `rolodex` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("rolodex")
            .map_err(|e| anyhow::anyhow!("Failed to find rolodex binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI invocation.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
