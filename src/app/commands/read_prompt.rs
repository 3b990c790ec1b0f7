//! `read-agent-prompt`: load a prompt, append the task, publish it.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, compose_prompt};
use crate::ports::{PipelineOutput, PromptFilesystem};

/// Output key carrying the composed prompt.
pub const PROMPT_OUTPUT_KEY: &str = "prompt";

#[derive(Debug, Clone, Default)]
pub struct ReadPromptOptions {
    pub prompt_file: PathBuf,
    /// Blank tasks are treated as absent.
    pub task: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPromptResult {
    pub prompt: String,
    pub line_count: usize,
}

pub fn execute<F, O>(
    ctx: &AppContext<F, O>,
    options: &ReadPromptOptions,
) -> Result<ReadPromptResult, AppError>
where
    F: PromptFilesystem,
    O: PipelineOutput,
{
    if !ctx.filesystem().exists(&options.prompt_file) {
        return Err(AppError::PromptFileNotFound(options.prompt_file.clone()));
    }

    let contents = ctx.filesystem().read_to_string(&options.prompt_file)?;
    let prompt = compose_prompt(&contents, options.task.as_deref());

    ctx.output().set_multiline(PROMPT_OUTPUT_KEY, &prompt)?;

    // An empty prompt still counts as one line.
    let line_count = prompt.split('\n').count();
    Ok(ReadPromptResult { prompt, line_count })
}
