//! Schema docs CLI.
//!
//! Command-line interface for rendering GraphQL schema documentation
//! fragments from an introspection result.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `list` - Show the indexed types and directives
//! - `render` - Render documents for entity names
//! - `assets` - Show renderer headers and asset files
//!
//! # Examples
//!
//! ```bash
//! # Render the Query type as JSON
//! schema-docs --format json render schema.json Query
//!
//! # Use host options from a config file
//! schema-docs render schema.json User --config graphdoc.toml
//! ```

use anyhow::Result;
use clap::Parser;
use schema_docs_cli::cli::{Cli, Commands};
use schema_docs_cli::commands;
use schema_docs_core::cli::{ExitCode, OutputFormat};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            commands::exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<ExitCode> {
    let output_format = cli.format.parse::<OutputFormat>()?;
    execute_command(cli.command, output_format)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::List { schema } => commands::list::run(&schema, output_format),
        Commands::Render {
            schema,
            names,
            config,
            title,
            no_assets,
        } => {
            let overrides = commands::common::Overrides { title, no_assets };
            commands::render::run(&schema, &names, config.as_deref(), &overrides, output_format)
        }
        Commands::Assets {
            schema,
            config,
            no_assets,
            out,
        } => {
            let overrides = commands::common::Overrides {
                title: None,
                no_assets,
            };
            commands::assets::run(
                &schema,
                config.as_deref(),
                &overrides,
                out.as_deref(),
                output_format,
            )
        }
    }
}
