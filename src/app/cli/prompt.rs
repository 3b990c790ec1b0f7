//! Prompt command implementations.

use std::path::{Path, PathBuf};

use crate::app::api::{self, AgentDirectoryOutcome, ReadPromptOptions, ResolvePromptOptions};
use crate::domain::AppError;

pub fn run_resolve(
    job: Option<String>,
    action_path: Option<String>,
    output_file: Option<&Path>,
) -> Result<(), AppError> {
    let options = ResolvePromptOptions {
        job: job.unwrap_or_default(),
        action_path: action_path.map(PathBuf::from).unwrap_or_default(),
    };
    let location = api::resolve_prompt_file(&options, output_file)?;

    println!("prompt_file={}", location.path.display());
    println!("source={}", location.source);
    Ok(())
}

pub fn run_create_directory(prompt_file: &Path) -> Result<(), AppError> {
    match api::create_agent_directory(prompt_file)? {
        AgentDirectoryOutcome::Created(dir) => println!("Created directory: {}", dir.display()),
        AgentDirectoryOutcome::AlreadyExists(dir) => {
            println!("Directory already exists: {}", dir.display())
        }
    }
    Ok(())
}

pub fn run_read(
    prompt_file: PathBuf,
    task: Option<String>,
    output_file: Option<&Path>,
) -> Result<(), AppError> {
    let options = ReadPromptOptions { prompt_file, task };
    let result = api::read_agent_prompt(&options, output_file)?;

    println!("Set output prompt with {} lines", result.line_count);
    println!("Successfully read prompt from: {}", options.prompt_file.display());
    Ok(())
}
