//! `create-agent-directory`: make sure a prompt file's parent directory exists.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PromptFilesystem;

/// What happened to the parent directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentDirectoryOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl AgentDirectoryOutcome {
    pub fn directory(&self) -> &Path {
        match self {
            AgentDirectoryOutcome::Created(dir) | AgentDirectoryOutcome::AlreadyExists(dir) => dir,
        }
    }
}

/// Parent of `prompt_file`; a bare file name lives in the current directory.
fn parent_directory(prompt_file: &Path) -> PathBuf {
    match prompt_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

pub fn execute(
    filesystem: &impl PromptFilesystem,
    prompt_file: &Path,
) -> Result<AgentDirectoryOutcome, AppError> {
    let dir = parent_directory(prompt_file);

    if filesystem.exists(&dir) {
        return Ok(AgentDirectoryOutcome::AlreadyExists(dir));
    }

    filesystem.create_dir_all(&dir)?;
    log::debug!("created {}", dir.display());
    Ok(AgentDirectoryOutcome::Created(dir))
}
