mod recording_output;

pub use recording_output::RecordingOutput;
