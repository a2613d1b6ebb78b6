//! Output formatters for CLI commands.
//!
//! Every command builds a serializable report and hands it here, so the
//! three output modes stay consistent across commands.

use anyhow::Result;
use colored::Colorize;
use schema_docs_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
///
/// # Examples
///
/// ```
/// use schema_docs_cli::formatters::format_output;
/// use schema_docs_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Entity {
///     name: String,
///     kind: String,
/// }
///
/// let entity = Entity {
///     name: "Query".to_string(),
///     kind: "OBJECT".to_string(),
/// };
///
/// let output = format_output(&entity, OutputFormat::Text)?;
/// assert!(output.lines().any(|line| line == "name: Query"));
/// assert!(output.lines().any(|line| line == "kind: OBJECT"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
///
/// One `path: value` line per leaf, without colors, so output can be piped
/// through `grep` or `cut`. Array elements are addressed as `path[i]`.
pub mod text {
    use super::{Result, Serialize, Value};

    /// Format data as plain text lines.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, "", &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, path: &str, lines: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    flatten(child, &child_path, lines);
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    flatten(child, &format!("{path}[{i}]"), lines);
                }
            }
            Value::String(s) if path.is_empty() => lines.push(s.clone()),
            Value::String(s) => lines.push(format!("{path}: {s}")),
            other if path.is_empty() => lines.push(other.to_string()),
            other => lines.push(format!("{path}: {other}")),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value};

    /// Format data as a colorized, indented outline.
    ///
    /// Keys are bold, strings green, numbers cyan and booleans yellow.
    /// Multi-line strings are printed as indented blocks.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&value, 0, &mut out);
        Ok(out.trim_end().to_string())
    }

    fn write_value(value: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) if map.is_empty() => {
                out.push_str(&format!("{pad}{}\n", "(empty)".dimmed()));
            }
            Value::Object(map) => {
                for (key, child) in map {
                    write_entry(&key.bold().to_string(), child, indent, out);
                }
            }
            Value::Array(items) if items.is_empty() => {
                out.push_str(&format!("{pad}{}\n", "(none)".dimmed()));
            }
            Value::Array(items) => {
                for child in items {
                    write_entry(&"-".dimmed().to_string(), child, indent, out);
                }
            }
            scalar => out.push_str(&format!("{pad}{}\n", scalar_text(scalar))),
        }
    }

    fn write_entry(label: &str, child: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match child {
            Value::Object(_) | Value::Array(_) => {
                out.push_str(&format!("{pad}{label}\n"));
                write_value(child, indent + 1, out);
            }
            Value::String(s) if s.contains('\n') => {
                out.push_str(&format!("{pad}{label}\n"));
                let inner = "  ".repeat(indent + 1);
                for line in s.lines() {
                    out.push_str(&format!("{inner}{}\n", line.green()));
                }
            }
            scalar => out.push_str(&format!("{pad}{label} {}\n", scalar_text(scalar))),
        }
    }

    fn scalar_text(value: &Value) -> String {
        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) | Value::Object(_) => value.to_string(),
        }
    }
}
