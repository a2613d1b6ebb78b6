//! List command implementation.
//!
//! Shows the names the document plugin has indexed, so users can see what
//! `render` will accept.

use super::common::{build_plugin, load_schema};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use schema_docs_core::cli::{ExitCode, OutputFormat};
use schema_docs_core::{HostOptions, Schema};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// An indexed type.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TypeEntry {
    /// Type name
    pub name: String,
    /// Introspection kind, e.g. `OBJECT`
    pub kind: String,
    /// Whether `render` produces a document for it
    pub renderable: bool,
    /// Root operation served by this type (`query`, `mutation`, `subscription`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<&'static str>,
}

/// Indexed types and directives, sorted by name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntityList {
    /// Indexed types
    pub types: Vec<TypeEntry>,
    /// Indexed directive names
    pub directives: Vec<String>,
}

/// Runs the list command.
///
/// # Errors
///
/// Returns an error if the schema cannot be loaded or the output cannot be
/// formatted.
pub fn run(schema_path: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    info!("Listing entities in {}", schema_path.display());

    let schema = load_schema(schema_path)?;
    let list = list_entities(&schema)?;

    let formatted = format_output(&list, output_format).context("failed to format entity list")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

/// Collects the plugin's indexes for `schema`.
///
/// Entries sharing a name collapse to the last one, matching what `render`
/// dispatches on.
///
/// # Errors
///
/// Returns an error if the document plugin cannot be created.
pub fn list_entities(schema: &Schema) -> Result<EntityList> {
    let plugin = build_plugin(schema, &HostOptions::new(), None)?;

    let mut types: Vec<TypeEntry> = plugin
        .types()
        .values()
        .map(|t| TypeEntry {
            name: t.name.clone(),
            kind: t.kind.to_string(),
            renderable: t.kind.is_documentable(),
            root: schema.root_operation(&t.name),
        })
        .collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));

    let mut directives: Vec<String> = plugin.directives().keys().cloned().collect();
    directives.sort();

    Ok(EntityList { types, directives })
}
