//! Core types, options and errors for GraphQL schema documentation.
//!
//! This crate provides the foundational types used across all other crates
//! in the schema-docs workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The GraphQL introspection model (`Schema`, `TypeDescriptor`, `DirectiveDescriptor`)
//! - Plugin options resolved from host options (`HostOptions`, `PluginOptions`)
//! - The plugin context shared by the host (`PluginContext`)
//! - Error hierarchy with contextual information
//! - CLI value types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod context;
mod error;
mod types;

pub mod cli;

pub use config::{
    DEFAULT_DOCUMENT_TITLE, HOST_OPTIONS_KEY, HostOptions, PLUGIN_OPTIONS_KEY, PluginOptions,
    PluginOptionsOverride,
};
pub use context::{DEFAULT_BASE_URL, PluginContext};
pub use error::{Error, Result};
pub use types::{
    DirectiveDescriptor, EnumValueDescriptor, FieldDescriptor, InputValueDescriptor, RootTypeRef,
    Schema, TypeDescriptor, TypeKind, TypeRef,
};
