//! Schema docs CLI library.
//!
//! This library provides the core functionality for the `schema-docs` tool,
//! exposing the argument parser, commands and formatters so they can be
//! tested without spawning the binary.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
pub mod commands;
pub mod formatters;
