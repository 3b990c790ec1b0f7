use crate::ports::{PipelineOutput, PromptFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: PromptFilesystem, O: PipelineOutput> {
    filesystem: F,
    output: O,
}

impl<F: PromptFilesystem, O: PipelineOutput> AppContext<F, O> {
    /// Create a new application context.
    pub fn new(filesystem: F, output: O) -> Self {
        Self { filesystem, output }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the pipeline output sink.
    pub fn output(&self) -> &O {
        &self.output
    }
}
