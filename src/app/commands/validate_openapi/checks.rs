//! Semantic checks the JSON Schema cannot express.

use std::collections::BTreeSet;

use openapiv3::{OpenAPI, Parameter, PathItem, ReferenceOr};

use super::operations;
use super::references::{Resolver, collect_references};

/// Dangling, external and circular `$ref`s, in document order.
pub fn references(raw: &serde_json::Value) -> Vec<String> {
    let resolver = Resolver::new(raw);
    collect_references(raw)
        .into_iter()
        .filter_map(|(location, reference)| {
            resolver.lookup(&reference).err().map(|err| format!("{}: {}", location, err))
        })
        .collect()
}

/// Path-template names that no parameter declares, and path parameters the
/// template never mentions.
pub fn path_parameters(raw: &serde_json::Value, api: &OpenAPI) -> Vec<String> {
    let resolver = Resolver::new(raw);
    let mut details = Vec::new();

    for (path, item) in &api.paths.paths {
        // Unresolvable path items are reported by `references`.
        let Ok(item) = resolver.resolve(item) else {
            continue;
        };
        check_path_parameters(path, &item, &resolver, &mut details);
    }

    details
}

/// `{name}` segments of a path template.
fn template_parameters(path: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };
        names.insert(after[..end].to_string());
        rest = &after[end + 1..];
    }
    names
}

fn declared_path_parameters(
    parameters: &[ReferenceOr<Parameter>],
    resolver: &Resolver<'_>,
    declared: &mut BTreeSet<String>,
) {
    for parameter in parameters {
        if let Ok(Parameter::Path { parameter_data, .. }) = resolver.resolve(parameter) {
            declared.insert(parameter_data.name);
        }
    }
}

fn check_path_parameters(
    path: &str,
    item: &PathItem,
    resolver: &Resolver<'_>,
    details: &mut Vec<String>,
) {
    let template = template_parameters(path);

    for (method, operation) in operations(item) {
        let mut declared = BTreeSet::new();
        declared_path_parameters(&item.parameters, resolver, &mut declared);
        declared_path_parameters(&operation.parameters, resolver, &mut declared);

        for missing in template.difference(&declared) {
            details.push(format!(
                "{} {}: path parameter '{}' is not declared",
                method, path, missing
            ));
        }
        for extra in declared.difference(&template) {
            details.push(format!(
                "{} {}: path parameter '{}' has no matching {{{}}} in the path",
                method, path, extra, extra
            ));
        }
    }
}
