//! Assets command implementation.
//!
//! Shows the page headers and static files the renderer contributes, or a
//! notice when assets are disabled. Files are only listed once they have
//! been written with `--out`.

use super::common::{Overrides, build_plugin, load_schema, resolve_host_options};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use schema_docs_core::cli::{ExitCode, OutputFormat};
use schema_docs_core::{HostOptions, PluginOptions, Schema};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Notice shown when `enableAssets` is off.
pub const ASSETS_DISABLED_NOTICE: &str = "assets are disabled (enableAssets = false)";

/// Headers and asset files contributed by the renderer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AssetReport {
    /// Whether the plugin exposes asset hooks
    pub enabled: bool,
    /// HTML fragments for the page `<head>`
    pub headers: Vec<String>,
    /// Files to copy next to the generated pages
    pub assets: Vec<String>,
    /// Set when assets are disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Runs the assets command.
///
/// # Errors
///
/// Returns an error if the inputs cannot be loaded or the output cannot be
/// formatted.
pub fn run(
    schema_path: &Path,
    config: Option<&Path>,
    overrides: &Overrides,
    out: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Collecting assets for {}", schema_path.display());

    let schema = load_schema(schema_path)?;
    let host = resolve_host_options(config, overrides)?;
    let report = collect_assets(&schema, &host, out)?;

    let formatted = format_output(&report, output_format).context("failed to format asset report")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

/// Queries the plugin's asset hooks, writing asset files into `out` first.
///
/// # Errors
///
/// Returns an error if the document plugin cannot be created or the asset
/// files cannot be written.
pub fn collect_assets(schema: &Schema, host: &HostOptions, out: Option<&Path>) -> Result<AssetReport> {
    let out = out.filter(|_| PluginOptions::resolve(host).is_ok_and(|o| o.enable_assets));
    let plugin = build_plugin(schema, host, out)?;

    let report = match plugin.asset_hooks() {
        Some(hooks) => AssetReport {
            enabled: true,
            headers: hooks.get_headers(),
            assets: hooks
                .get_assets()
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
            notice: None,
        },
        None => AssetReport {
            enabled: false,
            headers: Vec::new(),
            assets: Vec::new(),
            notice: Some(ASSETS_DISABLED_NOTICE.to_string()),
        },
    };

    Ok(report)
}
