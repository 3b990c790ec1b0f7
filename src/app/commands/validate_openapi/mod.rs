//! `validate-openapi`: parse, validate and summarise an OpenAPI 3.0 document.

mod checks;
pub mod loader;
mod references;
mod report;
mod schema;

use std::fs;
use std::path::Path;

use openapiv3::{Operation, PathItem};

use crate::domain::{AppError, HttpMethod, OpenApiReport};

/// Validate the document at `path` and summarise it.
///
/// Schema violations and reference problems fail the whole document with
/// every problem listed in the error's details. Path-template checks run only
/// once the schema accepts the document. Quality findings (duplicate
/// operationIds, missing descriptions) are part of the report instead.
pub fn execute(path: &Path) -> Result<OpenApiReport, AppError> {
    if !path.exists() {
        return Err(AppError::OpenApiFileNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let raw = loader::parse(path, &text)?;

    let mut details = schema::violations(&raw)?;
    let schema_clean = details.is_empty();
    details.extend(checks::references(&raw));

    if schema_clean {
        let api = loader::typed(&raw)?;
        details.extend(checks::path_parameters(&raw, &api));
        if details.is_empty() {
            return Ok(report::build(&raw, &api));
        }
    }

    log::debug!("{} validation problem(s) in {}", details.len(), path.display());
    Err(AppError::validation("Validation failed", details))
}

/// Operations of a path item, in canonical method order. `trace` is not counted.
pub(crate) fn operations(item: &PathItem) -> Vec<(HttpMethod, &Operation)> {
    let slots = [
        (HttpMethod::Get, &item.get),
        (HttpMethod::Post, &item.post),
        (HttpMethod::Put, &item.put),
        (HttpMethod::Patch, &item.patch),
        (HttpMethod::Delete, &item.delete),
        (HttpMethod::Options, &item.options),
        (HttpMethod::Head, &item.head),
    ];
    slots.into_iter().filter_map(|(method, op)| op.as_ref().map(|op| (method, op))).collect()
}
