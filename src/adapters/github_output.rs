//! `GITHUB_OUTPUT` file writer.
//!
//! Single-line values are appended as `key=value`. Multi-line values use the
//! heredoc form `key<<DELIM` ... `DELIM` with a delimiter derived from the
//! value so no line of the value can terminate the block early.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::ports::PipelineOutput;

/// Appends outputs to the file named by `GITHUB_OUTPUT`.
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, text: &str) -> Result<(), AppError> {
        let wrap =
            |source: std::io::Error| AppError::PipelineOutput { path: self.path.clone(), source };

        let mut file =
            OpenOptions::new().create(true).append(true).open(&self.path).map_err(wrap)?;
        file.write_all(text.as_bytes()).map_err(wrap)?;
        Ok(())
    }
}

impl PipelineOutput for GithubOutputFile {
    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if value.contains(['\n', '\r']) {
            return Err(AppError::MultilineOutputValue { key: key.to_string() });
        }
        self.append(&format!("{key}={value}\n"))
    }

    fn set_multiline(&self, key: &str, value: &str) -> Result<(), AppError> {
        let delimiter = heredoc_delimiter(value);
        log::debug!("writing {key} to {} with delimiter {delimiter}", self.path.display());
        self.append(&format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
    }
}

/// Output sink used when no pipeline output file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOutput;

impl PipelineOutput for NoopOutput {
    fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn set_multiline(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Ok(())
    }
}

/// Delimiter guaranteed not to appear as a whole line of `value`.
pub fn heredoc_delimiter(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let hex: String = digest.iter().take(8).map(|byte| format!("{:02x}", byte)).collect();

    let mut delimiter = format!("ghadelimiter_{hex}");
    while value.lines().any(|line| line == delimiter) {
        delimiter.push('_');
    }
    delimiter
}
