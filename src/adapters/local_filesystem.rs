use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PromptFilesystem;

/// Filesystem access rooted at a working directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a filesystem adapter for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a filesystem adapter for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Absolute paths pass through unchanged.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl PromptFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve(path))?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }
}
