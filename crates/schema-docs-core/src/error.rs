//! Error types for schema documentation.
//!
//! This module provides the error hierarchy shared by every crate in the
//! workspace. Variants carry the context needed to explain the failure and
//! expose `is_xxx()` classification methods instead of an `ErrorKind` enum.
//!
//! Note that an unknown entity name is never an error: document lookups
//! report it as an empty result.
//!
//! # Examples
//!
//! ```
//! use schema_docs_core::{Error, Result};
//!
//! fn require_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::InvalidArgument("name cannot be empty".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_name("").unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for schema documentation.
#[derive(Error, Debug)]
pub enum Error {
    /// Plugin options section has an unexpected shape.
    ///
    /// Raised when the host options contain the plugin section but it cannot
    /// be read as an object with `documentTitle` (string) and `enableAssets`
    /// (boolean) fields.
    #[error("Invalid options under '{key}': {source}")]
    InvalidOptions {
        /// Host options key holding the malformed section
        key: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Schema introspection data could not be parsed.
    #[error("Schema parse error: {message}")]
    SchemaParse {
        /// Description of the parse failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A bundled asset could not be written to disk.
    #[error("Failed to write asset {}: {source}", path.display())]
    AssetError {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is an invalid options error.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_docs_core::{HostOptions, PluginOptions};
    /// use serde_json::json;
    ///
    /// let host = HostOptions::from_value(json!({
    ///     "graphdoc-plugin-schema": { "enableAssets": "yes" }
    /// }))
    /// .unwrap();
    ///
    /// let err = PluginOptions::resolve(&host).unwrap_err();
    /// assert!(err.is_invalid_options());
    /// ```
    #[must_use]
    pub const fn is_invalid_options(&self) -> bool {
        matches!(self, Self::InvalidOptions { .. })
    }

    /// Returns `true` if this is a schema parse error.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_docs_core::Schema;
    ///
    /// let err = Schema::from_json_str("not json").unwrap_err();
    /// assert!(err.is_schema_error());
    /// ```
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(self, Self::SchemaParse { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an asset write error.
    #[must_use]
    pub const fn is_asset_error(&self) -> bool {
        matches!(self, Self::AssetError { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias for schema documentation operations.
pub type Result<T> = std::result::Result<T, Error>;
