pub mod agent_directory;
pub mod read_prompt;
pub mod resolve_prompt;
pub mod validate_openapi;
