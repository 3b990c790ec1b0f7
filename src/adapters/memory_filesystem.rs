use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::PromptFilesystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    // Using Arc<Mutex> to allow cloning and shared state inspection
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering its ancestors as directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.files.lock().unwrap().insert(path, content.to_string());
        self
    }

    pub fn remove_file(&self, path: &Path) {
        self.files.lock().unwrap().remove(path);
    }

    pub fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.lock().unwrap().len()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl PromptFilesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dir_exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.insert_dirs(path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }
}
