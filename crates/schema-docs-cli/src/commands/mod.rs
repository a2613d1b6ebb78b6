//! Command implementations for the `schema-docs` CLI.
//!
//! Each command module loads its inputs, runs the document plugin and
//! formats a report according to the requested output format.

pub mod assets;
pub mod common;
pub mod list;
pub mod render;

use schema_docs_core::cli::ExitCode;

/// Maps a command failure to a process exit code.
///
/// Errors caused by the user's input (an unreadable schema, malformed host
/// options, a bad argument value) exit with [`ExitCode::INVALID_INPUT`];
/// everything else exits with [`ExitCode::ERROR`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let invalid_input = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<schema_docs_core::Error>())
        .any(|e| e.is_schema_error() || e.is_invalid_options() || e.is_invalid_argument());

    if invalid_input {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::ERROR
    }
}
