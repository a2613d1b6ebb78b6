//! Values the host shares with every plugin it constructs.

use crate::config::{HOST_OPTIONS_KEY, HostOptions};
use serde::{Deserialize, Serialize};

/// Default base URL prefixed to generated links.
pub const DEFAULT_BASE_URL: &str = "./";

/// Plugin context supplied by the host alongside the schema and options.
///
/// # Examples
///
/// ```
/// use schema_docs_core::{HostOptions, PluginContext};
/// use serde_json::json;
///
/// let host = HostOptions::default()
///     .with_section("graphdoc", json!({ "baseUrl": "/api/" }));
///
/// let context = PluginContext::from_host_options(&host);
/// assert_eq!(context.base_url, "/api/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginContext {
    /// Prefix for links between generated pages and to static assets
    pub base_url: String,
}

impl Default for PluginContext {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl PluginContext {
    /// Reads the context from the host's own options section.
    ///
    /// A missing or non-string `baseUrl` falls back to the default.
    #[must_use]
    pub fn from_host_options(host: &HostOptions) -> Self {
        let base_url = host
            .section(HOST_OPTIONS_KEY)
            .and_then(|section| section.get("baseUrl"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), str::to_string);

        Self { base_url }
    }
}
