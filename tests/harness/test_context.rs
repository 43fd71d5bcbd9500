//! Shared testing harness for `outreach` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures;

/// Isolated working directory with the three source tables under `data/`.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a working directory populated with the fixture tables.
    pub(crate) fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_table("linkedin_data.csv", fixtures::PROFILES_CSV);
        ctx.write_table("website_data.csv", fixtures::COMPANIES_CSV);
        ctx.write_table("news_data.csv", fixtures::NEWS_CSV);
        ctx
    }

    /// Create a working directory with no data.
    pub(crate) fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn data_dir(&self) -> PathBuf {
        self.work_dir.join("data")
    }

    pub(crate) fn write_table(&self, file: &str, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data directory");
        fs::write(self.data_dir().join(file), content).expect("Failed to write table");
    }

    /// Write `outreach.toml` in the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("outreach.toml"), content).expect("Failed to write config");
    }

    /// Point generation at a mock server.
    pub(crate) fn use_api_url(&self, url: &str) {
        self.write_config(&format!("[generation]\napi_url = \"{}\"\n", url));
    }

    /// Build a command for invoking the compiled `outreach` binary with no
    /// credentials in the environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("outreach").expect("Failed to locate outreach binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("OUTREACH_API_KEY")
            .env_remove("GOOGLE_API_KEY")
            .env_remove("OUTREACH_LOG");
        cmd
    }

    /// Like [`cli`](Self::cli) with an API key set.
    pub(crate) fn cli_with_key(&self, key: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("OUTREACH_API_KEY", key);
        cmd
    }
}
