pub mod github_output;
pub mod local_filesystem;
#[cfg(test)]
pub mod memory_filesystem;

pub use github_output::{GithubOutputFile, NoopOutput, heredoc_delimiter};
pub use local_filesystem::LocalFilesystem;
#[cfg(test)]
pub use memory_filesystem::MemoryFilesystem;
