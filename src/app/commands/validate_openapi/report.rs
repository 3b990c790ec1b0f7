//! Statistics over a validated document.

use std::collections::HashSet;

use openapiv3::OpenAPI;

use super::operations;
use super::references::Resolver;
use crate::domain::{OpenApiReport, ServerEntry};

fn is_blank(text: &Option<String>) -> bool {
    text.as_deref().is_none_or(str::is_empty)
}

pub fn build(raw: &serde_json::Value, api: &OpenAPI) -> OpenApiReport {
    let resolver = Resolver::new(raw);
    let mut report = OpenApiReport {
        title: api.info.title.clone(),
        version: api.info.version.clone(),
        description: api
            .info
            .description
            .as_deref()
            .and_then(|d| d.split('\n').next())
            .map(str::to_string),
        path_count: api.paths.paths.len(),
        servers: api
            .servers
            .iter()
            .map(|s| ServerEntry { url: s.url.clone(), description: s.description.clone() })
            .collect(),
        ..OpenApiReport::default()
    };

    if let Some(components) = &api.components {
        report.schemas = components.schemas.keys().cloned().collect();
        report.security_schemes = components.security_schemes.keys().cloned().collect();
    }

    let mut seen_operation_ids = HashSet::new();

    for (path, item) in &api.paths.paths {
        let Ok(item) = resolver.resolve(item) else {
            log::warn!("skipping unresolved path item {}", path);
            continue;
        };

        for (method, operation) in operations(&item) {
            report.endpoint_count += 1;
            *report.methods.entry(method).or_insert(0) += 1;
            let endpoint = format!("{} {}", method, path);

            if let Some(id) = &operation.operation_id {
                if !seen_operation_ids.insert(id.clone()) {
                    report.duplicate_operation_ids.push(id.clone());
                }
            }

            if is_blank(&operation.description) && is_blank(&operation.summary) {
                report.missing_descriptions.push(endpoint.clone());
            }

            let responses = &operation.responses;
            if responses.default.is_none() && responses.responses.is_empty() {
                report.missing_responses.push(endpoint);
            }
        }
    }

    report
}
