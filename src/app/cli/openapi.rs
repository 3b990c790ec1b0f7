//! `validate-openapi` output rendering.

use std::path::Path;

use crate::app::api;
use crate::domain::{AppError, HttpMethod, OpenApiReport};

/// Schema names listed before eliding the rest.
const SCHEMA_PREVIEW: usize = 5;

pub fn run_validate(spec: &Path) -> Result<(), AppError> {
    println!("OpenAPI Specification Validation");
    println!("=================================");
    println!("Validating: {}\n", spec.display());

    let report = api::validate_openapi(spec).inspect_err(|_| eprintln!("❌ Validation failed"))?;
    print!("{}", render(&report));
    Ok(())
}

pub(crate) fn render(report: &OpenApiReport) -> String {
    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    line("✓ Valid OpenAPI specification".to_string());
    line("\nAPI Information:".to_string());
    line(format!("  Title: {}", report.title));
    line(format!("  Version: {}", report.version));
    if let Some(description) = &report.description {
        line(format!("  Description: {}...", description));
    }

    line("\nEndpoint Statistics:".to_string());
    line(format!("  Total paths: {}", report.path_count));
    line(format!("  Total endpoints: {}", report.endpoint_count));
    line("  Methods breakdown:".to_string());
    for method in HttpMethod::ALL {
        let count = report.method_count(method);
        if count > 0 {
            line(format!("    {}: {}", method, count));
        }
    }

    line(format!("\nSchemas: {} defined", report.schemas.len()));
    if !report.schemas.is_empty() {
        let preview: Vec<&str> =
            report.schemas.iter().take(SCHEMA_PREVIEW).map(String::as_str).collect();
        let more = if report.schemas.len() > SCHEMA_PREVIEW { ", ..." } else { "" };
        line(format!("  Schemas: {}{}", preview.join(", "), more));
    }

    line("\nSecurity:".to_string());
    if report.security_schemes.is_empty() {
        line("  ⚠ No security schemes defined".to_string());
    } else {
        line(format!("  Security schemes: {}", report.security_schemes.join(", ")));
    }

    if report.servers.is_empty() {
        line("\n⚠ No servers defined".to_string());
    } else {
        line(format!("\nServers: {} defined", report.servers.len()));
        for (index, server) in report.servers.iter().enumerate() {
            let description = server.description.as_deref().unwrap_or("No description");
            line(format!("  {}. {} - {}", index + 1, server.url, description));
        }
    }

    line("\nAdditional Checks:".to_string());
    if report.has_duplicate_operation_ids() {
        for id in &report.duplicate_operation_ids {
            line(format!("  ✗ Duplicate operationId found: {}", id));
        }
    } else {
        line("  ✓ All operationIds are unique".to_string());
    }

    if report.missing_descriptions.is_empty() {
        line("  ✓ All endpoints have descriptions or summaries".to_string());
    } else {
        line(format!(
            "  ⚠ {} endpoint(s) missing descriptions: {}",
            report.missing_descriptions.len(),
            report.missing_descriptions.join(", ")
        ));
    }

    if report.missing_responses.is_empty() {
        line("  ✓ All endpoints have response definitions".to_string());
    } else {
        line(format!(
            "  ✗ {} endpoint(s) missing response definitions: {}",
            report.missing_responses.len(),
            report.missing_responses.join(", ")
        ));
    }

    line("\n✅ OpenAPI specification validation completed successfully!".to_string());
    out
}
