//! Environment variable names read at the CLI edge.
//!
//! Only `app::cli` and logger setup read the process environment; everything
//! below them takes these values as explicit parameters.

/// Name of the current pipeline job.
pub const JOB_ENV: &str = "GITHUB_JOB";

/// Base directory of the action bundle.
pub const ACTION_PATH_ENV: &str = "GITHUB_ACTION_PATH";

/// Pipeline output file.
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Task supplied through a workflow dispatch input.
pub const TASK_ENV: &str = "GITHUB_EVENT_INPUTS_TASK";

/// Log filter, consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "CIELO_LOG";

/// Default OpenAPI document checked by `validate-openapi`.
pub const DEFAULT_OPENAPI_PATH: &str = "openapi.yaml";
