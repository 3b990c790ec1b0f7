//! Key/value sink read by the CI system between steps.

use crate::domain::AppError;

/// Port for pipeline outputs (`GITHUB_OUTPUT` on GitHub Actions).
pub trait PipelineOutput {
    /// Append a single-line `key=value` entry.
    ///
    /// `value` must not contain newlines; use [`PipelineOutput::set_multiline`] otherwise.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Append a value that may span several lines.
    fn set_multiline(&self, key: &str, value: &str) -> Result<(), AppError>;
}

impl<T: PipelineOutput + ?Sized> PipelineOutput for Box<T> {
    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn set_multiline(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set_multiline(key, value)
    }
}
