//! Filesystem operations the prompt commands depend on.

use std::path::Path;

use crate::domain::AppError;

/// Port for the handful of filesystem primitives used by the prompt commands.
///
/// Paths are interpreted relative to the process working directory.
pub trait PromptFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing ancestors. No-op if present.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;
}
