//! Local `$ref` resolution over the raw document tree.

use openapiv3::ReferenceOr;
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Longest `$ref` chain followed before assuming a cycle.
const MAX_REF_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefError {
    #[error("external reference '{0}' is not supported")]
    External(String),
    #[error("reference '{0}' does not resolve")]
    Dangling(String),
    #[error("reference '{0}' is circular")]
    Circular(String),
    #[error("reference '{reference}' has unexpected shape: {details}")]
    Shape { reference: String, details: String },
}

/// Every `$ref` string in the tree, paired with the JSON pointer where it appears.
pub fn collect_references(raw: &Value) -> Vec<(String, String)> {
    let mut found = Vec::new();
    walk(raw, &mut String::new(), &mut found);
    found
}

fn walk(value: &Value, pointer: &mut String, found: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(reference)) = map.get("$ref") {
                found.push((format!("#{}", pointer), reference.clone()));
            }
            for (key, child) in map {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&escape_pointer_token(key));
                walk(child, pointer, found);
                pointer.truncate(len);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&index.to_string());
                walk(child, pointer, found);
                pointer.truncate(len);
            }
        }
        _ => {}
    }
}

pub fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Read-only view for following local references.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    raw: &'a Value,
}

impl<'a> Resolver<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// Follow `reference` (and any chained `$ref`) to a non-reference node.
    pub fn lookup(&self, reference: &str) -> Result<&'a Value, RefError> {
        let mut current = reference;
        for _ in 0..MAX_REF_DEPTH {
            let fragment = current
                .strip_prefix('#')
                .ok_or_else(|| RefError::External(current.to_string()))?;
            // The fragment is URI-encoded; JSON pointer escaping applies after decoding.
            let pointer = percent_decode_str(fragment)
                .decode_utf8()
                .map_err(|_| RefError::Dangling(current.to_string()))?;
            let target =
                self.raw.pointer(&pointer).ok_or_else(|| RefError::Dangling(current.to_string()))?;

            match target.get("$ref").and_then(Value::as_str) {
                Some(next) => current = next,
                None => return Ok(target),
            }
        }
        Err(RefError::Circular(reference.to_string()))
    }

    /// Dereference a typed `ReferenceOr`, cloning inline items.
    pub fn resolve<T>(&self, item: &ReferenceOr<T>) -> Result<T, RefError>
    where
        T: DeserializeOwned + Clone,
    {
        match item {
            ReferenceOr::Item(value) => Ok(value.clone()),
            ReferenceOr::Reference { reference } => {
                let target = self.lookup(reference)?;
                serde_json::from_value(target.clone()).map_err(|e| RefError::Shape {
                    reference: reference.clone(),
                    details: e.to_string(),
                })
            }
        }
    }
}
