//! CLI Adapter.

mod openapi;
mod prompt;

use std::path::PathBuf;

use crate::app::config::{ACTION_PATH_ENV, DEFAULT_OPENAPI_PATH, JOB_ENV, OUTPUT_ENV, TASK_ENV};
use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cielo")]
#[command(version)]
#[command(
    about = "Resolve and forward agent prompts in CI pipelines, and check OpenAPI documents",
    long_about = None
)]
struct Cli {
    /// Pipeline output file that results are appended to
    #[arg(long, env = OUTPUT_ENV, global = true, value_name = "FILE")]
    output_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the prompt file for the current job
    #[clap(visible_alias = "resolve")]
    ResolvePromptFile {
        /// Job identifier
        #[arg(long, env = JOB_ENV)]
        job: Option<String>,
        /// Base directory of the action bundle
        #[arg(long, env = ACTION_PATH_ENV)]
        action_path: Option<String>,
    },
    /// Create the directory that will hold a prompt file
    #[clap(visible_alias = "mkdir")]
    CreateAgentDirectory {
        /// Prompt file path whose parent directory should exist
        prompt_file: PathBuf,
    },
    /// Read a prompt file and publish it as the `prompt` output
    #[clap(visible_alias = "read")]
    ReadAgentPrompt {
        /// Prompt file path
        prompt_file: PathBuf,
        /// Task appended to the prompt
        task: Option<String>,
        /// Task from the workflow dispatch input; takes precedence over the positional task
        #[arg(long, env = TASK_ENV, hide = true)]
        event_task: Option<String>,
    },
    /// Validate an OpenAPI 3.0 document and report quality metrics
    #[clap(visible_alias = "openapi")]
    ValidateOpenapi {
        /// Document path
        #[arg(default_value = DEFAULT_OPENAPI_PATH)]
        spec: PathBuf,
    },
}

/// Present and non-empty.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init();

    let cli = Cli::parse();
    let output_file = non_empty(cli.output_file).map(PathBuf::from);

    let result: Result<(), AppError> = match cli.command {
        Commands::ResolvePromptFile { job, action_path } => prompt::run_resolve(
            non_empty(job),
            non_empty(action_path),
            output_file.as_deref(),
        ),
        Commands::CreateAgentDirectory { prompt_file } => prompt::run_create_directory(&prompt_file),
        Commands::ReadAgentPrompt { prompt_file, task, event_task } => {
            let task = non_empty(event_task).or(task);
            prompt::run_read(prompt_file, task, output_file.as_deref())
        }
        Commands::ValidateOpenapi { spec } => openapi::run_validate(&spec),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn report_error(error: &AppError) {
    eprintln!("Error: {}", error);
    let details = error.details();
    if !details.is_empty() {
        eprintln!("\nDetailed errors:");
        for detail in details {
            eprintln!("  - {}", detail);
        }
    }
}
