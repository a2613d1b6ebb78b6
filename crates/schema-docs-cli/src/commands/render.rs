//! Render command implementation.
//!
//! Renders the documents for each requested name through the HTML
//! renderer and prints them with their titles.

use super::common::{Overrides, build_plugin, load_schema, resolve_host_options};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use schema_docs_core::cli::{ExitCode, OutputFormat};
use schema_docs_core::{HostOptions, Schema};
use schema_docs_plugin::Document;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Documents rendered for one requested name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedEntity {
    /// Requested name
    pub name: String,
    /// Rendered documents; empty when the name is not documented
    pub documents: Vec<Document>,
}

/// Runs the render command.
///
/// Unknown names are reported with an empty document list and do not
/// fail the command.
///
/// # Errors
///
/// Returns an error if the inputs cannot be loaded, rendering fails, or the
/// output cannot be formatted.
pub fn run(
    schema_path: &Path,
    names: &[String],
    config: Option<&Path>,
    overrides: &Overrides,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Rendering {} name(s) from {}", names.len(), schema_path.display());

    let schema = load_schema(schema_path)?;
    let host = resolve_host_options(config, overrides)?;
    let rendered = render_names(&schema, &host, names)?;

    let formatted =
        format_output(&rendered, output_format).context("failed to format rendered documents")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

/// Renders the documents for each of `names`, in order.
///
/// # Errors
///
/// Returns an error if the plugin cannot be created or the renderer fails.
pub fn render_names(
    schema: &Schema,
    host: &HostOptions,
    names: &[String],
) -> Result<Vec<RenderedEntity>> {
    let plugin = build_plugin(schema, host, None)?;

    names
        .iter()
        .map(|name| {
            let documents = plugin
                .get_documents(name)
                .with_context(|| format!("failed to render '{name}'"))?;
            if documents.is_empty() {
                warn!(name = %name, "no documents for name");
            }
            Ok(RenderedEntity {
                name: name.clone(),
                documents,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_docs_core::PLUGIN_OPTIONS_KEY;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::from_json_str(
            r#"{
                "types": [{ "name": "Date", "kind": "SCALAR", "description": "Calendar day" }],
                "directives": [{ "name": "Date", "locations": ["FIELD"] }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_names_in_order() {
        let names = vec!["Missing".to_string(), "Date".to_string()];
        let rendered = render_names(&schema(), &HostOptions::new(), &names).unwrap();

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].name, "Missing");
        assert!(rendered[0].documents.is_empty());
        assert_eq!(rendered[1].documents.len(), 1);
        assert!(rendered[1].documents[0].description.contains("scalar"));
    }

    #[test]
    fn test_render_names_uses_title_override() {
        let host = HostOptions::new().with_section(PLUGIN_OPTIONS_KEY, json!({ "documentTitle": "Schema" }));
        let rendered = render_names(&schema(), &host, &["Date".to_string()]).unwrap();

        assert_eq!(rendered[0].documents[0].title, "Schema");
    }

    #[test]
    fn test_render_names_rejects_malformed_options() {
        let host = HostOptions::new().with_section(PLUGIN_OPTIONS_KEY, json!("oops"));
        let err = render_names(&schema(), &host, &["Date".to_string()]).unwrap_err();

        assert_eq!(crate::commands::exit_code_for(&err), ExitCode::INVALID_INPUT);
    }
}
