//! Schema document plugin for GraphQL documentation generators.
//!
//! The host builds a [`DocumentPlugin`] from an introspected schema, its
//! options object and a plugin context, then asks it for the documents of
//! each entity name it knows about. The plugin finds the name among the
//! schema's types (then directives), hands the descriptor to the renderer
//! operation matching its kind and wraps the fragment in a titled
//! [`Document`].
//!
//! # Architecture
//!
//! - [`SchemaRenderer`] - renderer delegate, injected through a factory
//! - [`DocumentPlugin`] - name indices, kind dispatch, document envelope
//! - [`AssetHooks`] - header/asset operations, present only when assets are enabled
//!
//! # Thread Safety
//!
//! The plugin holds no interior mutability; it is `Send + Sync` whenever its
//! renderer is.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod document;
pub mod plugin;
pub mod renderer;

pub use document::Document;
pub use plugin::DocumentPlugin;
pub use renderer::{AssetHooks, SchemaRenderer};
