//! Prompt-file resolution policy.
//!
//! A job's prompt lives either inside the consuming repository
//! (`.cielo/agents/<job>.md`) or in the action bundle
//! (`<action>/agents/<job>.md`). The repository copy always wins so projects
//! can override a bundled prompt without touching the bundle.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Directory, relative to the repository root, holding repository-local prompts.
pub const REPOSITORY_AGENTS_DIR: &str = ".cielo/agents";

/// Directory, relative to the action base path, holding bundled prompts.
pub const ACTION_AGENTS_DIR: &str = "agents";

/// Where a resolved prompt file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptSource {
    Repository,
    Action,
    /// Neither candidate existed; the repository path is returned so it can be created.
    Default,
}

impl PromptSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptSource::Repository => "repository",
            PromptSource::Action => "action",
            PromptSource::Default => "default",
        }
    }
}

impl fmt::Display for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptLocation {
    #[serde(rename = "prompt_file")]
    pub path: PathBuf,
    pub source: PromptSource,
}

/// `.cielo/agents/<job>.md`
pub fn repository_candidate(job: &str) -> PathBuf {
    Path::new(REPOSITORY_AGENTS_DIR).join(format!("{job}.md"))
}

/// `<action_base>/agents/<job>.md`
pub fn action_candidate(action_base: &Path, job: &str) -> PathBuf {
    action_base.join(ACTION_AGENTS_DIR).join(format!("{job}.md"))
}

/// Pick the prompt file for `job`.
///
/// `exists` is consulted at most twice and never fails; every outcome is a
/// valid location. Callers validate that `job` and `action_base` are non-empty.
pub fn resolve<F>(job: &str, action_base: &Path, exists: F) -> PromptLocation
where
    F: Fn(&Path) -> bool,
{
    let repo_path = repository_candidate(job);
    if exists(&repo_path) {
        return PromptLocation { path: repo_path, source: PromptSource::Repository };
    }

    let action_path = action_candidate(action_base, job);
    if exists(&action_path) {
        return PromptLocation { path: action_path, source: PromptSource::Action };
    }

    PromptLocation { path: repo_path, source: PromptSource::Default }
}
