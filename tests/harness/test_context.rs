//! Shared testing harness for `cielo` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables a GitHub runner would set; cleared so tests never inherit them.
const PIPELINE_ENV: &[&str] = &[
    "GITHUB_JOB",
    "GITHUB_ACTION_PATH",
    "GITHUB_OUTPUT",
    "GITHUB_EVENT_INPUTS_TASK",
    "CIELO_LOG",
    "RUST_LOG",
];

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    action_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with a repository and an action bundle directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let action_dir = root.path().join("action");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&action_dir).expect("Failed to create test action directory");

        Self { root, work_dir, action_dir }
    }

    /// Repository checkout used as the working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory standing in for `GITHUB_ACTION_PATH`.
    pub(crate) fn action_dir(&self) -> &Path {
        &self.action_dir
    }

    /// Path of the pipeline output file (not created until written).
    pub(crate) fn output_file(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    /// Contents of the pipeline output file, empty if never written.
    pub(crate) fn read_output(&self) -> String {
        fs::read_to_string(self.output_file()).unwrap_or_default()
    }

    /// Build a command for invoking the compiled `cielo` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cielo").expect("Failed to locate cielo binary");
        cmd.current_dir(&self.work_dir);
        for name in PIPELINE_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// `cli()` with the job, action path and output file configured.
    pub(crate) fn pipeline_cli(&self, job: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GITHUB_JOB", job)
            .env("GITHUB_ACTION_PATH", &self.action_dir)
            .env("GITHUB_OUTPUT", self.output_file());
        cmd
    }

    /// Write a prompt under `.cielo/agents/` in the repository.
    pub(crate) fn write_repository_prompt(&self, job: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(".cielo/agents").join(format!("{job}.md"));
        write_file(&path, content);
        path
    }

    /// Write a prompt under `agents/` in the action bundle.
    pub(crate) fn write_action_prompt(&self, job: &str, content: &str) -> PathBuf {
        let path = self.action_dir.join("agents").join(format!("{job}.md"));
        write_file(&path, content);
        path
    }

    /// Write a file relative to the work directory.
    pub(crate) fn write_work_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        write_file(&path, content);
        path
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write test file");
}
