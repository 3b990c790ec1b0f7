//! Quality summary of a validated OpenAPI document.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Operation methods counted as endpoints. `trace` is intentionally absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerEntry {
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenApiReport {
    pub title: String,
    pub version: String,
    /// First line of `info.description`, if any.
    pub description: Option<String>,
    pub path_count: usize,
    pub endpoint_count: usize,
    pub methods: BTreeMap<HttpMethod, usize>,
    pub schemas: Vec<String>,
    pub security_schemes: Vec<String>,
    pub servers: Vec<ServerEntry>,
    /// One entry per repeated occurrence of an operationId.
    pub duplicate_operation_ids: Vec<String>,
    /// Endpoints with neither description nor summary, as `METHOD /path`.
    pub missing_descriptions: Vec<String>,
    /// Endpoints without any response definition, as `METHOD /path`.
    pub missing_responses: Vec<String>,
}

impl OpenApiReport {
    pub fn has_duplicate_operation_ids(&self) -> bool {
        !self.duplicate_operation_ids.is_empty()
    }

    pub fn method_count(&self, method: HttpMethod) -> usize {
        self.methods.get(&method).copied().unwrap_or(0)
    }
}
