//! Command-line arguments for `schema-docs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Schema docs - render GraphQL schema entities as documentation fragments.
///
/// Loads an introspection result, indexes its types and directives by name
/// and renders highlighted SDL for the requested entities.
#[derive(Parser, Debug)]
#[command(name = "schema-docs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the types and directives a schema documents.
    ///
    /// # Examples
    ///
    /// ```bash
    /// schema-docs list schema.json
    /// ```
    List {
        /// Path to an introspection result (JSON)
        schema: PathBuf,
    },

    /// Render the documents for one or more entity names.
    ///
    /// Names are matched exactly. Types shadow directives of the same name,
    /// and unknown names render no documents.
    ///
    /// # Examples
    ///
    /// ```bash
    /// schema-docs render schema.json Query User @deprecated
    /// schema-docs render schema.json Query --title Schema --format json
    /// ```
    Render {
        /// Path to an introspection result (JSON)
        schema: PathBuf,

        /// Entity names to render
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,

        /// Host options file (TOML when the extension is `.toml`, JSON otherwise)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the document title
        #[arg(long)]
        title: Option<String>,

        /// Disable stylesheet headers and assets
        #[arg(long)]
        no_assets: bool,
    },

    /// Show the page headers and asset files the renderer contributes.
    ///
    /// # Examples
    ///
    /// ```bash
    /// schema-docs assets schema.json --config graphdoc.toml
    /// schema-docs assets schema.json --out site/assets
    /// ```
    Assets {
        /// Path to an introspection result (JSON)
        schema: PathBuf,

        /// Host options file (TOML when the extension is `.toml`, JSON otherwise)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable stylesheet headers and assets
        #[arg(long)]
        no_assets: bool,

        /// Write the bundled asset files into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
