pub mod error;
pub mod openapi_report;
pub mod prompt;
pub mod prompt_location;

pub use error::AppError;
pub use openapi_report::{HttpMethod, OpenApiReport, ServerEntry};
pub use prompt::compose_prompt;
pub use prompt_location::{PromptLocation, PromptSource};
