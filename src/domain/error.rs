use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for cielo operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required environment variable (or its flag equivalent) was absent or empty.
    #[error("{0} environment variable is required")]
    MissingEnvironment(String),

    /// Prompt file absent at read time.
    #[error("Prompt file does not exist: {}", .0.display())]
    PromptFileNotFound(PathBuf),

    /// OpenAPI document absent.
    #[error("OpenAPI specification file not found at {}", .0.display())]
    OpenApiFileNotFound(PathBuf),

    /// OpenAPI document failed parsing or validation.
    #[error("{message}")]
    OpenApiValidation { message: String, details: Vec<String> },

    /// A single-line pipeline output was given a value with a line break.
    #[error("Output '{key}' must be a single line")]
    MultilineOutputValue { key: String },

    /// Appending to the pipeline output file failed.
    #[error("Failed to write pipeline output {}: {source}", path.display())]
    PipelineOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn missing_env<S: Into<String>>(name: S) -> Self {
        AppError::MissingEnvironment(name.into())
    }

    pub fn validation<S: Into<String>>(message: S, details: Vec<String>) -> Self {
        AppError::OpenApiValidation { message: message.into(), details }
    }

    /// Structured details attached to a validation failure, empty otherwise.
    pub fn details(&self) -> &[String] {
        match self {
            AppError::OpenApiValidation { details, .. } => details,
            _ => &[],
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingEnvironment(_)
            | AppError::OpenApiValidation { .. }
            | AppError::MultilineOutputValue { .. } => io::ErrorKind::InvalidInput,
            AppError::PromptFileNotFound(_) | AppError::OpenApiFileNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::PipelineOutput { source, .. } => source.kind(),
        }
    }
}
