//! Document plugin: name lookup, kind dispatch and document assembly.
//!
//! # Examples
//!
//! ```
//! use schema_docs_core::{
//!     DirectiveDescriptor, HostOptions, PluginContext, Result, Schema, TypeDescriptor, TypeKind,
//! };
//! use schema_docs_plugin::{DocumentPlugin, SchemaRenderer};
//!
//! #[derive(Debug)]
//! struct KindName;
//!
//! impl SchemaRenderer for KindName {
//!     fn scalar(&self, _: &TypeDescriptor) -> Result<String> { Ok("scalar".into()) }
//!     fn object(&self, _: &TypeDescriptor) -> Result<String> { Ok("object".into()) }
//!     fn interfaces(&self, _: &TypeDescriptor) -> Result<String> { Ok("interface".into()) }
//!     fn union(&self, _: &TypeDescriptor) -> Result<String> { Ok("union".into()) }
//!     fn enumeration(&self, _: &TypeDescriptor) -> Result<String> { Ok("enum".into()) }
//!     fn input_object(&self, _: &TypeDescriptor) -> Result<String> { Ok("input".into()) }
//!     fn directive(&self, _: &DirectiveDescriptor) -> Result<String> { Ok("directive".into()) }
//! }
//!
//! let schema = Schema {
//!     types: vec![TypeDescriptor::new("some1", TypeKind::Scalar)],
//!     ..Schema::default()
//! };
//!
//! let plugin = DocumentPlugin::new(
//!     &schema,
//!     &HostOptions::default(),
//!     &PluginContext::default(),
//!     |_, _, _| Ok(KindName),
//! )?;
//!
//! let documents = plugin.get_documents("some1")?;
//! assert_eq!(documents.len(), 1);
//! assert_eq!(documents[0].title, "Definition");
//! assert!(plugin.get_documents("missing")?.is_empty());
//! # Ok::<(), schema_docs_core::Error>(())
//! ```

use crate::document::Document;
use crate::renderer::{AssetHooks, SchemaRenderer};
use schema_docs_core::{
    DirectiveDescriptor, HostOptions, PluginContext, PluginOptions, Result, Schema, TypeDescriptor,
    TypeKind,
};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Documents GraphQL types and directives by name.
///
/// Types and directives are indexed by name once at construction; the
/// indices and options never change afterwards, so [`get_documents`]
/// depends only on its argument.
///
/// Types whose kind is not documentable (for example a host-specific
/// `OPERATION` kind) are still indexed but never produce a document.
///
/// [`get_documents`]: DocumentPlugin::get_documents
#[derive(Debug)]
pub struct DocumentPlugin<R> {
    types: HashMap<String, TypeDescriptor>,
    directives: HashMap<String, DirectiveDescriptor>,
    options: PluginOptions,
    builder: R,
}

impl<R: SchemaRenderer> DocumentPlugin<R> {
    /// Creates a plugin for `schema`, building the renderer with `factory`.
    ///
    /// Options are resolved from the plugin section of `host_options`. The
    /// factory receives the same schema, host options and context the host
    /// passed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin options section is malformed or the
    /// factory fails.
    pub fn new<F>(
        schema: &Schema,
        host_options: &HostOptions,
        context: &PluginContext,
        factory: F,
    ) -> Result<Self>
    where
        F: FnOnce(&Schema, &HostOptions, &PluginContext) -> Result<R>,
    {
        let options = PluginOptions::resolve(host_options)?;
        let builder = factory(schema, host_options, context)?;

        Ok(Self::with_renderer(schema, options, builder))
    }

    /// Creates a plugin from already-resolved options and renderer.
    #[must_use]
    pub fn with_renderer(schema: &Schema, options: PluginOptions, builder: R) -> Self {
        let types: HashMap<_, _> = schema
            .types
            .iter()
            .map(|t| (t.name.clone(), t.clone()))
            .collect();
        let directives: HashMap<_, _> = schema
            .directives
            .iter()
            .map(|d| (d.name.clone(), d.clone()))
            .collect();

        debug!(
            types = types.len(),
            directives = directives.len(),
            document_title = %options.document_title,
            enable_assets = options.enable_assets,
            "Document plugin indexed schema"
        );

        Self {
            types,
            directives,
            options,
            builder,
        }
    }

    /// Returns the documents for the type or directive called `name`.
    ///
    /// Types are searched before directives. The result holds one document
    /// when a renderer handled the entity and is empty when `name` is unknown
    /// or names a type whose kind has no renderer.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error unchanged if rendering fails.
    pub fn get_documents(&self, name: &str) -> Result<Vec<Document>> {
        let fragment = if let Some(descriptor) = self.types.get(name) {
            self.render_type(descriptor)?
        } else if let Some(descriptor) = self.directives.get(name) {
            trace!(name, "Rendering directive");
            Some(self.builder.directive(descriptor)?)
        } else {
            trace!(name, "No type or directive with this name");
            None
        };

        Ok(fragment
            .map(|fragment| Document::wrap(self.options.document_title.as_str(), &fragment))
            .into_iter()
            .collect())
    }

    fn render_type(&self, descriptor: &TypeDescriptor) -> Result<Option<String>> {
        trace!(name = %descriptor.name, kind = %descriptor.kind, "Rendering type");

        let fragment = match descriptor.kind {
            TypeKind::Scalar => self.builder.scalar(descriptor)?,
            TypeKind::Object => self.builder.object(descriptor)?,
            TypeKind::Interface => self.builder.interfaces(descriptor)?,
            TypeKind::Union => self.builder.union(descriptor)?,
            TypeKind::Enum => self.builder.enumeration(descriptor)?,
            TypeKind::InputObject => self.builder.input_object(descriptor)?,
            TypeKind::List | TypeKind::NonNull | TypeKind::Other(_) => {
                trace!(name = %descriptor.name, kind = %descriptor.kind, "Kind has no renderer");
                return Ok(None);
            }
        };

        Ok(Some(fragment))
    }

    /// Returns the header and asset operations, or `None` when assets are
    /// disabled.
    #[must_use]
    pub fn asset_hooks(&self) -> Option<AssetHooks<'_, R>> {
        self.options
            .enable_assets
            .then(|| AssetHooks::new(&self.builder))
    }

    /// Returns the title given to every document.
    #[must_use]
    pub fn document_title(&self) -> &str {
        &self.options.document_title
    }

    /// Returns the resolved options.
    #[must_use]
    pub const fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Returns the type index.
    #[must_use]
    pub const fn types(&self) -> &HashMap<String, TypeDescriptor> {
        &self.types
    }

    /// Returns the directive index.
    #[must_use]
    pub const fn directives(&self) -> &HashMap<String, DirectiveDescriptor> {
        &self.directives
    }

    /// Returns the renderer delegate.
    #[must_use]
    pub const fn builder(&self) -> &R {
        &self.builder
    }
}
