//! Input loading shared across CLI commands.
//!
//! Reads the schema and host options from disk, applies command-line
//! overrides to the plugin section and builds the HTML document plugin.

use anyhow::{Context, Result};
use schema_docs_core::{Error, HostOptions, PLUGIN_OPTIONS_KEY, PluginContext, Schema};
use schema_docs_html::HtmlSchemaBuilder;
use schema_docs_plugin::DocumentPlugin;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Plugin option overrides given on the command line.
///
/// Overrides are written into the plugin section of the host options, so
/// they take precedence over values from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replacement for `documentTitle`
    pub title: Option<String>,
    /// Sets `enableAssets` to `false`
    pub no_assets: bool,
}

impl Overrides {
    /// Writes the overrides into `host`.
    pub fn apply(&self, host: &mut HostOptions) {
        if let Some(title) = &self.title {
            host.set_field(PLUGIN_OPTIONS_KEY, "documentTitle", Value::from(title.as_str()));
        }
        if self.no_assets {
            host.set_field(PLUGIN_OPTIONS_KEY, "enableAssets", Value::Bool(false));
        }
    }
}

/// Loads an introspection result from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an introspection
/// result.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let schema = Schema::from_json_str(&text)
        .with_context(|| format!("failed to parse schema file {}", path.display()))?;

    debug!(
        path = %path.display(),
        types = schema.types.len(),
        directives = schema.directives.len(),
        "loaded schema"
    );
    Ok(schema)
}

/// Loads host options from an optional config file.
///
/// Files ending in `.toml` are parsed as TOML, anything else as JSON.
/// Without a file the host options are empty.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or its top level
/// is not a table.
pub fn load_host_options(config: Option<&Path>) -> Result<HostOptions> {
    let Some(path) = config else {
        return Ok(HostOptions::new());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let value: Value = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&text)
            .map_err(|e| Error::InvalidArgument(format!("invalid TOML in {}: {e}", path.display())))?
    } else {
        serde_json::from_str(&text)
            .map_err(|e| Error::InvalidArgument(format!("invalid JSON in {}: {e}", path.display())))?
    };

    let host = HostOptions::from_value(value)
        .with_context(|| format!("invalid host options in {}", path.display()))?;

    debug!(path = %path.display(), sections = host.as_map().len(), "loaded host options");
    Ok(host)
}

/// Loads host options and applies command-line overrides.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded.
pub fn resolve_host_options(config: Option<&Path>, overrides: &Overrides) -> Result<HostOptions> {
    let mut host = load_host_options(config)?;
    overrides.apply(&mut host);
    Ok(host)
}

/// Builds the document plugin with the HTML renderer.
///
/// With `assets_dir`, the bundled stylesheet is written there and reported
/// through the plugin's asset hooks.
///
/// # Errors
///
/// Returns an error if the plugin options are malformed, the renderer
/// cannot be created, or the stylesheet cannot be written.
pub fn build_plugin(
    schema: &Schema,
    host: &HostOptions,
    assets_dir: Option<&Path>,
) -> Result<DocumentPlugin<HtmlSchemaBuilder>> {
    let context = PluginContext::from_host_options(host);
    DocumentPlugin::new(schema, host, &context, |schema, host, context| {
        let builder = HtmlSchemaBuilder::new(schema, host, context)?;
        match assets_dir {
            Some(dir) => builder.with_assets_dir(dir),
            None => Ok(builder),
        }
    })
    .context("failed to create document plugin")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_overrides_apply() {
        let mut host = HostOptions::new();
        Overrides {
            title: Some("Schema".into()),
            no_assets: true,
        }
        .apply(&mut host);

        assert_eq!(
            host.section(PLUGIN_OPTIONS_KEY),
            Some(&json!({ "documentTitle": "Schema", "enableAssets": false }))
        );
    }

    #[test]
    fn test_empty_overrides_leave_host_untouched() {
        let mut host = HostOptions::new();
        Overrides::default().apply(&mut host);
        assert!(host.section(PLUGIN_OPTIONS_KEY).is_none());
    }

    #[test]
    fn test_load_host_options_toml() {
        let file = temp_file(
            ".toml",
            "[graphdoc]\nbaseUrl = \"/docs/\"\n\n[graphdoc-plugin-schema]\ndocumentTitle = \"Schema\"\n",
        );

        let host = load_host_options(Some(file.path())).unwrap();
        assert_eq!(host.section("graphdoc"), Some(&json!({ "baseUrl": "/docs/" })));
        assert_eq!(
            host.section(PLUGIN_OPTIONS_KEY),
            Some(&json!({ "documentTitle": "Schema" }))
        );
    }

    #[test]
    fn test_load_host_options_json() {
        let file = temp_file(".json", r#"{ "graphdoc-plugin-schema": { "enableAssets": false } }"#);
        let host = load_host_options(Some(file.path())).unwrap();
        assert_eq!(
            host.section(PLUGIN_OPTIONS_KEY),
            Some(&json!({ "enableAssets": false }))
        );
    }

    #[test]
    fn test_load_host_options_rejects_non_object() {
        let file = temp_file(".json", "[1, 2]");
        let err = load_host_options(Some(file.path())).unwrap_err();
        assert_eq!(crate::commands::exit_code_for(&err).as_i32(), 2);
    }

    #[test]
    fn test_load_host_options_rejects_bad_toml() {
        let file = temp_file(".toml", "not = [valid");
        let err = load_host_options(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_overrides_win_over_config() {
        let file = temp_file(".json", r#"{ "graphdoc-plugin-schema": { "documentTitle": "File" } }"#);
        let overrides = Overrides {
            title: Some("Flag".into()),
            no_assets: false,
        };

        let host = resolve_host_options(Some(file.path()), &overrides).unwrap();
        assert_eq!(
            host.section(PLUGIN_OPTIONS_KEY),
            Some(&json!({ "documentTitle": "Flag" }))
        );
    }

    #[test]
    fn test_load_schema_missing_file() {
        let err = load_schema(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read schema file"));
        assert_eq!(crate::commands::exit_code_for(&err).as_i32(), 1);
    }

    #[test]
    fn test_build_plugin_uses_base_url() {
        let schema = Schema::from_json_str(r#"{ "types": [{ "name": "Date", "kind": "SCALAR" }] }"#)
            .unwrap();
        let host = HostOptions::new().with_section("graphdoc", json!({ "baseUrl": "/docs/" }));

        let plugin = build_plugin(&schema, &host, None).unwrap();
        let hooks = plugin.asset_hooks().unwrap();
        assert!(hooks.get_headers()[1].contains("/docs/assets/code.css"));
    }
}
