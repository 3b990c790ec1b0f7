mod pipeline_output;
mod prompt_filesystem;

pub use pipeline_output::PipelineOutput;
pub use prompt_filesystem::PromptFilesystem;
