//! Prompt text composition.

/// Label separating the prompt body from an appended task.
pub const TASK_HEADING: &str = "Task to implement:";

/// Combine prompt file contents with an optional task.
///
/// Both parts are trimmed. A task that is empty after trimming counts as no task.
pub fn compose_prompt(contents: &str, task: Option<&str>) -> String {
    let mut prompt = contents.trim().to_string();

    if let Some(task) = task.map(str::trim).filter(|t| !t.is_empty()) {
        prompt.push_str("\n\n");
        prompt.push_str(TASK_HEADING);
        prompt.push(' ');
        prompt.push_str(task);
    }

    prompt
}
