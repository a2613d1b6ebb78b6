//! Configuration types for the schema document plugin.
//!
//! The host passes one options object shared by all of its plugins. Each
//! plugin reads its own section from it; this plugin's section lives under
//! [`PLUGIN_OPTIONS_KEY`] and may override any subset of [`PluginOptions`].
//!
//! # Examples
//!
//! ```
//! use schema_docs_core::{HostOptions, PluginOptions};
//! use serde_json::json;
//!
//! // No section: defaults
//! let options = PluginOptions::resolve(&HostOptions::default())?;
//! assert_eq!(options.document_title, "Definition");
//! assert!(options.enable_assets);
//!
//! // Partial section: only the given keys change
//! let host = HostOptions::from_value(json!({
//!     "graphdoc-plugin-schema": { "enableAssets": false }
//! }))?;
//! let options = PluginOptions::resolve(&host)?;
//! assert_eq!(options.document_title, "Definition");
//! assert!(!options.enable_assets);
//! # Ok::<(), schema_docs_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host options key holding this plugin's section.
pub const PLUGIN_OPTIONS_KEY: &str = "graphdoc-plugin-schema";

/// Host options key holding the host's own settings (`baseUrl`, ...).
pub const HOST_OPTIONS_KEY: &str = "graphdoc";

/// Default title of every produced document.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Definition";

/// Options object supplied by the host, keyed by section name.
///
/// # Examples
///
/// ```
/// use schema_docs_core::HostOptions;
/// use serde_json::json;
///
/// let host = HostOptions::default()
///     .with_section("graphdoc", json!({ "baseUrl": "/docs/" }));
///
/// assert_eq!(host.section("graphdoc").unwrap()["baseUrl"], "/docs/");
/// assert!(host.section("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostOptions(Map<String, Value>);

impl HostOptions {
    /// Creates empty host options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(Error::InvalidArgument(format!(
                "host options must be an object, got {other}"
            ))),
        }
    }

    /// Returns the section stored under `key`, if any.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Replaces the section stored under `key`.
    #[must_use]
    pub fn with_section(mut self, key: impl Into<String>, section: Value) -> Self {
        self.0.insert(key.into(), section);
        self
    }

    /// Sets a single field inside the section stored under `key`.
    ///
    /// A missing or non-object section is replaced by a new object.
    pub fn set_field(&mut self, key: &str, field: &str, value: Value) {
        let section = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            *section = Value::Object(Map::new());
        }
        if let Value::Object(map) = section {
            map.insert(field.to_string(), value);
        }
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Resolved plugin options.
///
/// Built once when the plugin is constructed and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Title given to every produced document.
    ///
    /// Default: `"Definition"`
    pub document_title: String,

    /// Whether the plugin contributes page headers and static assets.
    ///
    /// Default: true
    pub enable_assets: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            enable_assets: true,
        }
    }
}

impl PluginOptions {
    /// Resolves options from the plugin section of the host options.
    ///
    /// A missing or `null` section yields the defaults. Fields absent from
    /// the section keep their default value; unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if the section is not an object or
    /// a known field has the wrong type.
    pub fn resolve(host: &HostOptions) -> Result<Self> {
        let overrides = match host.section(PLUGIN_OPTIONS_KEY) {
            None => PluginOptionsOverride::default(),
            Some(Value::Null) => {
                tracing::warn!("'{PLUGIN_OPTIONS_KEY}' section is null, using defaults");
                PluginOptionsOverride::default()
            }
            Some(section) => PluginOptionsOverride::deserialize(section).map_err(|source| {
                Error::InvalidOptions {
                    key: PLUGIN_OPTIONS_KEY.to_string(),
                    source,
                }
            })?,
        };

        Ok(overrides.apply(Self::default()))
    }
}

/// Partial options as written by the user; `None` keeps the base value.
///
/// # Examples
///
/// ```
/// use schema_docs_core::{PluginOptions, PluginOptionsOverride};
///
/// let overrides = PluginOptionsOverride {
///     document_title: Some("Schema".to_string()),
///     enable_assets: None,
/// };
/// let options = overrides.apply(PluginOptions::default());
///
/// assert_eq!(options.document_title, "Schema");
/// assert!(options.enable_assets);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptionsOverride {
    /// Replacement document title
    #[serde(default)]
    pub document_title: Option<String>,
    /// Replacement asset flag
    #[serde(default)]
    pub enable_assets: Option<bool>,
}

impl PluginOptionsOverride {
    /// Applies every present field over `base`.
    #[must_use]
    pub fn apply(self, base: PluginOptions) -> PluginOptions {
        PluginOptions {
            document_title: self.document_title.unwrap_or(base.document_title),
            enable_assets: self.enable_assets.unwrap_or(base.enable_assets),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn host(value: Value) -> HostOptions {
        HostOptions::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_without_section() {
        let options = PluginOptions::resolve(&HostOptions::new()).unwrap();
        assert_eq!(options, PluginOptions::default());
        assert_eq!(options.document_title, "Definition");
        assert!(options.enable_assets);
    }

    #[test]
    fn test_full_override() {
        let host = host(json!({
            "graphdoc": { "baseUrl": "some" },
            "graphdoc-plugin-schema": {
                "documentTitle": "Description2",
                "enableAssets": false
            }
        }));
        let options = PluginOptions::resolve(&host).unwrap();
        assert_eq!(options.document_title, "Description2");
        assert!(!options.enable_assets);
    }

    #[test]
    fn test_title_only_override_keeps_assets() {
        let host = host(json!({ "graphdoc-plugin-schema": { "documentTitle": "Schema" } }));
        let options = PluginOptions::resolve(&host).unwrap();
        assert_eq!(options.document_title, "Schema");
        assert!(options.enable_assets);
    }

    #[test]
    fn test_null_section_uses_defaults() {
        let host = host(json!({ "graphdoc-plugin-schema": null }));
        assert_eq!(PluginOptions::resolve(&host).unwrap(), PluginOptions::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let host = host(json!({ "graphdoc-plugin-schema": { "theme": "dark" } }));
        assert_eq!(PluginOptions::resolve(&host).unwrap(), PluginOptions::default());
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let host = host(json!({ "graphdoc-plugin-schema": { "documentTitle": 7 } }));
        let err = PluginOptions::resolve(&host).unwrap_err();
        assert!(err.is_invalid_options());
    }

    #[test]
    fn test_non_object_section_rejected() {
        let host = host(json!({ "graphdoc-plugin-schema": "on" }));
        assert!(PluginOptions::resolve(&host).unwrap_err().is_invalid_options());
    }

    #[test]
    fn test_host_options_must_be_object() {
        assert!(HostOptions::from_value(json!([1])).unwrap_err().is_invalid_argument());
        assert_eq!(HostOptions::from_value(Value::Null).unwrap(), HostOptions::new());
    }

    #[test]
    fn test_set_field_creates_and_replaces_section() {
        let mut host = host(json!({ "graphdoc-plugin-schema": "garbage" }));
        host.set_field(PLUGIN_OPTIONS_KEY, "enableAssets", json!(false));
        host.set_field(PLUGIN_OPTIONS_KEY, "documentTitle", json!("T"));

        let options = PluginOptions::resolve(&host).unwrap();
        assert_eq!(options.document_title, "T");
        assert!(!options.enable_assets);
    }
}
