//! Read an OpenAPI document into a raw JSON tree, then into the typed model.
//!
//! The raw tree is what the schema and `$ref` checks see; the typed model
//! drives the statistics. Object keys keep document order in both.

use std::path::Path;

use openapiv3::OpenAPI;
use serde_json::Value;

use crate::domain::AppError;

/// Parse YAML or JSON text (JSON is a subset of YAML) and gate on the version.
pub fn parse(path: &Path, text: &str) -> Result<Value, AppError> {
    let raw: Value = serde_yaml::from_str(text).map_err(|e| {
        AppError::validation(format!("Failed to parse {}: {}", path.display(), e), Vec::new())
    })?;

    if !raw.is_object() {
        return Err(AppError::validation(
            format!("{} is not an OpenAPI document: expected a mapping at the top level", path.display()),
            Vec::new(),
        ));
    }

    check_version(&raw)?;
    Ok(raw)
}

/// Deserialize the typed model from a tree that already passed the schema.
pub fn typed(raw: &Value) -> Result<OpenAPI, AppError> {
    serde_json::from_value(raw.clone()).map_err(|e| {
        AppError::validation("Validation failed", vec![format!("Invalid document structure: {}", e)])
    })
}

fn check_version(raw: &Value) -> Result<(), AppError> {
    if let Some(swagger) = raw.get("swagger") {
        let version = swagger.as_str().map(str::to_string).unwrap_or_else(|| swagger.to_string());
        return Err(AppError::validation(
            "Unsupported API definition version",
            vec![format!("Swagger {} documents are not supported; expected OpenAPI 3.0.x", version)],
        ));
    }

    match raw.get("openapi") {
        Some(Value::String(version)) if is_supported_version(version) => Ok(()),
        Some(Value::String(version)) => Err(AppError::validation(
            "Unsupported API definition version",
            vec![format!("openapi: '{}' is not supported; expected 3.0.x", version)],
        )),
        Some(other) => Err(AppError::validation(
            "Validation failed",
            vec![format!("openapi: expected a version string, found {}", other)],
        )),
        None => Err(AppError::validation(
            "Validation failed",
            vec!["openapi: required field is missing".to_string()],
        )),
    }
}

fn is_supported_version(version: &str) -> bool {
    let mut parts = version.split('.');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some("3"), Some("0"), Some(patch), None) if !patch.is_empty() && patch.chars().all(|c| c.is_ascii_digit())
    )
}
