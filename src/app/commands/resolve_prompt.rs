//! `resolve-prompt-file`: choose the prompt file for the current job.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::config::{ACTION_PATH_ENV, JOB_ENV};
use crate::domain::{AppError, PromptLocation, prompt_location};
use crate::ports::{PipelineOutput, PromptFilesystem};

#[derive(Debug, Clone, Default)]
pub struct ResolvePromptOptions {
    /// Current pipeline job (`GITHUB_JOB`).
    pub job: String,
    /// Base directory of the action bundle (`GITHUB_ACTION_PATH`).
    pub action_path: PathBuf,
}

/// Resolve the prompt location and publish it as `prompt_file` / `source` outputs.
///
/// Fails before touching the output sink when either input is empty.
pub fn execute<F, O>(
    ctx: &AppContext<F, O>,
    options: &ResolvePromptOptions,
) -> Result<PromptLocation, AppError>
where
    F: PromptFilesystem,
    O: PipelineOutput,
{
    if options.job.is_empty() {
        return Err(AppError::missing_env(JOB_ENV));
    }
    if options.action_path.as_os_str().is_empty() {
        return Err(AppError::missing_env(ACTION_PATH_ENV));
    }

    let location = prompt_location::resolve(&options.job, &options.action_path, |path| {
        let found = ctx.filesystem().exists(path);
        log::debug!("prompt candidate {} exists={}", path.display(), found);
        found
    });
    log::info!("resolved prompt for job '{}' from {}", options.job, location.source);

    ctx.output().set("prompt_file", &location.path.to_string_lossy())?;
    ctx.output().set("source", location.source.as_str())?;

    Ok(location)
}
