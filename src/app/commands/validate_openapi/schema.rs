//! Validation against the published OpenAPI 3.0 JSON Schema.

use serde_json::Value;

use crate::domain::AppError;

const OAS_3_0_SCHEMA: &str = include_str!("oas-3.0.schema.json");

/// Every schema violation in `raw`, as `#<instance path>: <message>`.
pub fn violations(raw: &Value) -> Result<Vec<String>, AppError> {
    let schema: Value = serde_json::from_str(OAS_3_0_SCHEMA).map_err(|e| {
        AppError::validation("Failed to load the OpenAPI 3.0 schema", vec![e.to_string()])
    })?;
    let validator = jsonschema::validator_for(&schema).map_err(|e| {
        AppError::validation("Failed to load the OpenAPI 3.0 schema", vec![e.to_string()])
    })?;

    Ok(validator.iter_errors(raw).map(|e| format!("#{}: {}", e.instance_path(), e)).collect())
}
