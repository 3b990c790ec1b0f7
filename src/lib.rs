//! cielo: pipeline helpers for agent prompts and OpenAPI document checks.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AgentDirectoryOutcome, ReadPromptOptions, ReadPromptResult, ResolvePromptOptions,
    create_agent_directory, create_agent_directory_at, read_agent_prompt, read_agent_prompt_at,
    resolve_prompt_file, resolve_prompt_file_at, validate_openapi,
};
pub use domain::{AppError, HttpMethod, OpenApiReport, PromptLocation, PromptSource, ServerEntry};
