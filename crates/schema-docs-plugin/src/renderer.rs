//! Renderer delegate trait.
//!
//! The document plugin never produces markup itself. It hands each
//! descriptor to a [`SchemaRenderer`], one operation per documentable kind
//! plus one for directives, and wraps whatever fragment comes back.

use schema_docs_core::{DirectiveDescriptor, Result, TypeDescriptor};
use std::path::PathBuf;

/// Produces HTML fragments for schema entities.
///
/// Fragments are inserted verbatim into the document envelope, so
/// implementations are responsible for escaping schema text.
///
/// # Examples
///
/// ```
/// use schema_docs_core::{DirectiveDescriptor, Result, TypeDescriptor};
/// use schema_docs_plugin::SchemaRenderer;
///
/// #[derive(Debug)]
/// struct NameOnly;
///
/// impl SchemaRenderer for NameOnly {
///     fn scalar(&self, t: &TypeDescriptor) -> Result<String> { Ok(t.name.clone()) }
///     fn object(&self, t: &TypeDescriptor) -> Result<String> { Ok(t.name.clone()) }
///     fn interfaces(&self, t: &TypeDescriptor) -> Result<String> { Ok(t.name.clone()) }
///     fn union(&self, t: &TypeDescriptor) -> Result<String> { Ok(t.name.clone()) }
///     fn enumeration(&self, t: &TypeDescriptor) -> Result<String> { Ok(t.name.clone()) }
///     fn input_object(&self, t: &TypeDescriptor) -> Result<String> { Ok(t.name.clone()) }
///     fn directive(&self, d: &DirectiveDescriptor) -> Result<String> { Ok(d.name.clone()) }
/// }
///
/// assert!(NameOnly.headers().is_empty());
/// ```
pub trait SchemaRenderer {
    /// Renders a `SCALAR` type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be produced.
    fn scalar(&self, descriptor: &TypeDescriptor) -> Result<String>;

    /// Renders an `OBJECT` type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be produced.
    fn object(&self, descriptor: &TypeDescriptor) -> Result<String>;

    /// Renders an `INTERFACE` type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be produced.
    fn interfaces(&self, descriptor: &TypeDescriptor) -> Result<String>;

    /// Renders a `UNION` type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be produced.
    fn union(&self, descriptor: &TypeDescriptor) -> Result<String>;

    /// Renders an `ENUM` type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be produced.
    fn enumeration(&self, descriptor: &TypeDescriptor) -> Result<String>;

    /// Renders an `INPUT_OBJECT` type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be produced.
    fn input_object(&self, descriptor: &TypeDescriptor) -> Result<String>;

    /// Renders a directive.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be produced.
    fn directive(&self, descriptor: &DirectiveDescriptor) -> Result<String>;

    /// Markup the host should add to the `<head>` of every page.
    fn headers(&self) -> Vec<String> {
        Vec::new()
    }

    /// Static files the host should copy next to the generated pages.
    fn assets(&self) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// Header and asset operations of a plugin with assets enabled.
///
/// Obtained from [`DocumentPlugin::asset_hooks`](crate::DocumentPlugin::asset_hooks);
/// its absence means the plugin contributes no headers or assets.
#[derive(Debug)]
pub struct AssetHooks<'a, R: ?Sized> {
    renderer: &'a R,
}

impl<'a, R: SchemaRenderer + ?Sized> AssetHooks<'a, R> {
    pub(crate) const fn new(renderer: &'a R) -> Self {
        Self { renderer }
    }

    /// Returns the renderer's page headers unchanged.
    #[must_use]
    pub fn get_headers(&self) -> Vec<String> {
        self.renderer.headers()
    }

    /// Returns the renderer's asset paths unchanged.
    #[must_use]
    pub fn get_assets(&self) -> Vec<PathBuf> {
        self.renderer.assets()
    }
}
