//! HTML renderer for schema documents.
//!
//! Provides [`HtmlSchemaBuilder`], the default [`SchemaRenderer`] used with
//! the document plugin. Each entity is rendered as GraphQL SDL markup with
//! syntax-highlighting classes, using Handlebars templates compiled once at
//! construction.
//!
//! [`SchemaRenderer`]: schema_docs_plugin::SchemaRenderer

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod markup;
pub mod template_engine;

pub use builder::HtmlSchemaBuilder;
