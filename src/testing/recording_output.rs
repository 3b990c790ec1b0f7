use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::PipelineOutput;

/// Pipeline output that records entries in memory.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub entries: RefCell<Vec<(String, String)>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl PipelineOutput for RecordingOutput {
    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn set_multiline(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.set(key, value)
    }
}
