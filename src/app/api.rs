//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Each function takes its configuration explicitly;
//! nothing here reads the process environment.

use std::path::{Path, PathBuf};

use crate::adapters::{GithubOutputFile, LocalFilesystem, NoopOutput};
use crate::app::AppContext;
use crate::app::commands::{agent_directory, read_prompt, resolve_prompt, validate_openapi};
use crate::ports::PipelineOutput;

pub use crate::app::commands::agent_directory::AgentDirectoryOutcome;
pub use crate::app::commands::read_prompt::{ReadPromptOptions, ReadPromptResult};
pub use crate::app::commands::resolve_prompt::ResolvePromptOptions;
pub use crate::domain::{AppError, OpenApiReport, PromptLocation, PromptSource};

/// Output sink for an optional `GITHUB_OUTPUT` path.
fn pipeline_output(output_file: Option<&Path>) -> Box<dyn PipelineOutput> {
    match output_file {
        Some(path) => Box::new(GithubOutputFile::new(path)),
        None => Box::new(NoopOutput),
    }
}

fn create_context(
    root: PathBuf,
    output_file: Option<&Path>,
) -> AppContext<LocalFilesystem, Box<dyn PipelineOutput>> {
    AppContext::new(LocalFilesystem::new(root), pipeline_output(output_file))
}

/// Resolve the prompt file for a job relative to the current directory.
pub fn resolve_prompt_file(
    options: &ResolvePromptOptions,
    output_file: Option<&Path>,
) -> Result<PromptLocation, AppError> {
    resolve_prompt_file_at(std::env::current_dir()?, options, output_file)
}

/// Resolve the prompt file for a job relative to `root`.
pub fn resolve_prompt_file_at(
    root: impl Into<PathBuf>,
    options: &ResolvePromptOptions,
    output_file: Option<&Path>,
) -> Result<PromptLocation, AppError> {
    let ctx = create_context(root.into(), output_file);
    resolve_prompt::execute(&ctx, options)
}

/// Ensure the parent directory of `prompt_file` exists.
pub fn create_agent_directory(prompt_file: &Path) -> Result<AgentDirectoryOutcome, AppError> {
    create_agent_directory_at(std::env::current_dir()?, prompt_file)
}

/// Ensure the parent directory of `prompt_file` exists, relative to `root`.
pub fn create_agent_directory_at(
    root: impl Into<PathBuf>,
    prompt_file: &Path,
) -> Result<AgentDirectoryOutcome, AppError> {
    agent_directory::execute(&LocalFilesystem::new(root.into()), prompt_file)
}

/// Read a prompt, append the task, and publish it as the `prompt` output.
pub fn read_agent_prompt(
    options: &ReadPromptOptions,
    output_file: Option<&Path>,
) -> Result<ReadPromptResult, AppError> {
    read_agent_prompt_at(std::env::current_dir()?, options, output_file)
}

/// Same as [`read_agent_prompt`], relative to `root`.
pub fn read_agent_prompt_at(
    root: impl Into<PathBuf>,
    options: &ReadPromptOptions,
    output_file: Option<&Path>,
) -> Result<ReadPromptResult, AppError> {
    let ctx = create_context(root.into(), output_file);
    read_prompt::execute(&ctx, options)
}

/// Validate an OpenAPI 3.0 document and summarise it.
pub fn validate_openapi(path: &Path) -> Result<OpenApiReport, AppError> {
    validate_openapi::execute(path)
}
