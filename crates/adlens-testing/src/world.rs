//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory that serves as the adlens config
//! directory (`ADLENS_PATH`), so tests never read the developer's own
//! configuration or endpoint.

use adlens_types::CampaignRecord;
use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Variables that would leak the host environment into a test run
const ISOLATED_ENV: [&str; 3] = ["ADLENS_ENDPOINT", "ADLENS_PATH", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use adlens_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_campaigns("campaigns.json", &fixtures::pair());
/// let result = world.run(&["--source", "campaigns.json", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".adlens");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Root of the temp directory; relative paths in `run` resolve here.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `records` as a JSON source file named `name`.
    pub fn with_campaigns(self, name: &str, records: &[CampaignRecord]) -> Self {
        self.write_file(name, &fixtures::to_json(records))
            .expect("Failed to write campaign file");
        self
    }

    /// Write raw text to a file under the temp root.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn write_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.config_path();
        std::fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read_file(&self, name: &str) -> Result<String> {
        let path = self.temp_dir.path().join(name);
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("ADLENS_PATH", &self.config_dir);
        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with arguments in this environment.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("adlens")
            .map_err(|e| anyhow::anyhow!("Failed to find adlens binary: {}", e))?;

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

/// Result of a CLI execution.
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

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON:\n{}", self.stdout))
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
