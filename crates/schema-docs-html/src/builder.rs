//! HTML renderer delegate for the document plugin.
//!
//! [`HtmlSchemaBuilder`] renders each entity as GraphQL SDL, one `<li>` per
//! source line, ready to be placed inside the plugin's
//! `<ul class="code">` envelope. Descriptions become `#` comment lines and
//! named types link to their own pages.
//!
//! The stylesheet is compiled into the crate. Hosts that copy assets call
//! [`HtmlSchemaBuilder::with_assets_dir`] to write it out first; until then
//! [`assets`](SchemaRenderer::assets) reports no files.
//!
//! # Examples
//!
//! ```
//! use schema_docs_core::{HostOptions, PluginContext, Schema, TypeDescriptor, TypeKind};
//! use schema_docs_html::HtmlSchemaBuilder;
//! use schema_docs_plugin::DocumentPlugin;
//!
//! let schema = Schema {
//!     types: vec![TypeDescriptor::new("Date", TypeKind::Scalar)],
//!     ..Schema::default()
//! };
//!
//! let plugin = DocumentPlugin::new(
//!     &schema,
//!     &HostOptions::default(),
//!     &PluginContext::default(),
//!     HtmlSchemaBuilder::new,
//! )?;
//!
//! let documents = plugin.get_documents("Date")?;
//! assert!(documents[0].description.contains(r#"<span class="identifier">Date</span>"#));
//! # Ok::<(), schema_docs_core::Error>(())
//! ```

use crate::markup::{Linker, comment_lines, default_value, deprecation};
use crate::template_engine::{TemplateEngine, TemplateName};
use handlebars::html_escape;
use schema_docs_core::{
    DirectiveDescriptor, EnumValueDescriptor, Error, FieldDescriptor, HostOptions,
    InputValueDescriptor, PluginContext, Result, Schema, TypeDescriptor, TypeRef,
};
use schema_docs_plugin::SchemaRenderer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the bundled stylesheet.
pub const STYLESHEET_NAME: &str = "code.css";

/// Contents of the bundled stylesheet.
pub const STYLESHEET: &str = include_str!("../assets/code.css");

/// Monospace font used by the stylesheet.
pub const FONT_HEADER: &str =
    r#"<link href="https://fonts.googleapis.com/css?family=Ubuntu+Mono:400,700" rel="stylesheet">"#;

/// Renders schema entities as highlighted SDL.
#[derive(Debug)]
pub struct HtmlSchemaBuilder {
    engine: TemplateEngine<'static>,
    linker: Linker,
    base_url: String,
    assets: Vec<PathBuf>,
}

impl HtmlSchemaBuilder {
    /// Creates a builder for `schema`.
    ///
    /// The signature matches the factory expected by
    /// [`DocumentPlugin::new`](schema_docs_plugin::DocumentPlugin::new). Links
    /// use the context's base URL and only point at types present in
    /// `schema`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to register.
    pub fn new(schema: &Schema, _host_options: &HostOptions, context: &PluginContext) -> Result<Self> {
        let known_types = schema.types.iter().map(|t| t.name.clone()).collect();
        let engine = TemplateEngine::new()?;

        debug!(base_url = %context.base_url, "HTML schema builder ready");

        Ok(Self {
            engine,
            linker: Linker::new(context.base_url.clone(), known_types),
            base_url: context.base_url.clone(),
            assets: Vec::new(),
        })
    }

    /// Writes the bundled stylesheet into `dir` and reports it as an asset.
    ///
    /// `dir` is created if missing; an existing stylesheet is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetError`] if the directory or file cannot be
    /// written.
    pub fn with_assets_dir(mut self, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| Error::AssetError {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(STYLESHEET_NAME);
        fs::write(&path, STYLESHEET).map_err(|source| Error::AssetError {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "Wrote stylesheet");
        self.assets = vec![path];
        Ok(self)
    }

    fn render_fields(
        &self,
        keyword: &'static str,
        descriptor: &TypeDescriptor,
        fields: Vec<FieldView>,
    ) -> Result<String> {
        let view = TypeView {
            keyword,
            fields,
            interfaces: self.type_list(descriptor.interfaces.as_deref()),
            ..TypeView::new(descriptor)
        };
        self.engine.render(TemplateName::Fields, &view)
    }

    fn type_list(&self, refs: Option<&[TypeRef]>) -> Vec<String> {
        refs.unwrap_or_default()
            .iter()
            .map(|r| self.linker.type_ref(r))
            .collect()
    }

    fn output_field(&self, field: &FieldDescriptor) -> FieldView {
        FieldView {
            name: field.name.clone(),
            description: comment_lines(field.description.as_deref()),
            arguments: self.linker.arguments(&field.args),
            type_html: self.linker.type_ref(&field.type_ref),
            default_value: String::new(),
            deprecation: deprecation(field.is_deprecated, field.deprecation_reason.as_deref()),
        }
    }

    fn input_field(&self, field: &InputValueDescriptor) -> FieldView {
        FieldView {
            name: field.name.clone(),
            description: comment_lines(field.description.as_deref()),
            arguments: String::new(),
            type_html: self.linker.type_ref(&field.type_ref),
            default_value: default_value(field.default_value.as_deref()),
            deprecation: String::new(),
        }
    }
}

impl SchemaRenderer for HtmlSchemaBuilder {
    fn scalar(&self, descriptor: &TypeDescriptor) -> Result<String> {
        self.engine
            .render(TemplateName::Scalar, &TypeView::new(descriptor))
    }

    fn object(&self, descriptor: &TypeDescriptor) -> Result<String> {
        let fields = descriptor
            .fields
            .iter()
            .flatten()
            .map(|f| self.output_field(f))
            .collect();
        self.render_fields("type", descriptor, fields)
    }

    fn interfaces(&self, descriptor: &TypeDescriptor) -> Result<String> {
        let fields = descriptor
            .fields
            .iter()
            .flatten()
            .map(|f| self.output_field(f))
            .collect();
        self.render_fields("interface", descriptor, fields)
    }

    fn union(&self, descriptor: &TypeDescriptor) -> Result<String> {
        let view = TypeView {
            members: self.type_list(descriptor.possible_types.as_deref()),
            ..TypeView::new(descriptor)
        };
        self.engine.render(TemplateName::Union, &view)
    }

    fn enumeration(&self, descriptor: &TypeDescriptor) -> Result<String> {
        let view = TypeView {
            values: descriptor
                .enum_values
                .iter()
                .flatten()
                .map(EnumValueView::from)
                .collect(),
            ..TypeView::new(descriptor)
        };
        self.engine.render(TemplateName::Enum, &view)
    }

    fn input_object(&self, descriptor: &TypeDescriptor) -> Result<String> {
        let fields = descriptor
            .input_fields
            .iter()
            .flatten()
            .map(|f| self.input_field(f))
            .collect();
        self.render_fields("input", descriptor, fields)
    }

    fn directive(&self, descriptor: &DirectiveDescriptor) -> Result<String> {
        let view = DirectiveView {
            name: &descriptor.name,
            description: comment_lines(descriptor.description.as_deref()),
            arguments: self.linker.arguments(&descriptor.args),
            repeatable: descriptor.is_repeatable,
            locations: &descriptor.locations,
        };
        self.engine.render(TemplateName::Directive, &view)
    }

    fn headers(&self) -> Vec<String> {
        let stylesheet = format!("{}assets/{STYLESHEET_NAME}", self.base_url);
        vec![
            FONT_HEADER.to_string(),
            format!(
                r#"<link type="text/css" rel="stylesheet" href="{}" />"#,
                html_escape(&stylesheet)
            ),
        ]
    }

    fn assets(&self) -> Vec<PathBuf> {
        self.assets.clone()
    }
}

/// Template context shared by every type template.
///
/// Every key is always present because templates render in strict mode.
#[derive(Debug, Serialize)]
struct TypeView<'a> {
    keyword: &'static str,
    name: &'a str,
    description: Vec<String>,
    interfaces: Vec<String>,
    fields: Vec<FieldView>,
    members: Vec<String>,
    values: Vec<EnumValueView>,
}

impl<'a> TypeView<'a> {
    fn new(descriptor: &'a TypeDescriptor) -> Self {
        Self {
            keyword: "",
            name: &descriptor.name,
            description: comment_lines(descriptor.description.as_deref()),
            interfaces: Vec::new(),
            fields: Vec::new(),
            members: Vec::new(),
            values: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldView {
    name: String,
    description: Vec<String>,
    arguments: String,
    type_html: String,
    default_value: String,
    deprecation: String,
}

#[derive(Debug, Serialize)]
struct EnumValueView {
    name: String,
    description: Vec<String>,
    deprecation: String,
}

impl From<&EnumValueDescriptor> for EnumValueView {
    fn from(value: &EnumValueDescriptor) -> Self {
        Self {
            name: value.name.clone(),
            description: comment_lines(value.description.as_deref()),
            deprecation: deprecation(value.is_deprecated, value.deprecation_reason.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
struct DirectiveView<'a> {
    name: &'a str,
    description: Vec<String>,
    arguments: String,
    repeatable: bool,
    locations: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_docs_core::TypeKind;

    fn builder(schema: &Schema) -> HtmlSchemaBuilder {
        HtmlSchemaBuilder::new(schema, &HostOptions::default(), &PluginContext::default()).unwrap()
    }

    #[test]
    fn test_scalar_with_description() {
        let date = TypeDescriptor::new("Date", TypeKind::Scalar).with_description("Calendar day");
        let html = builder(&Schema::default()).scalar(&date).unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<li><span class="comment line"># Calendar day</span></li>"#,
                "\n",
                r#"<li><span class="keyword operator ts">scalar</span> <span class="identifier">Date</span></li>"#,
                "\n"
            )
        );
    }

    #[test]
    fn test_object_without_fields_still_closes_block() {
        let empty = TypeDescriptor::new("Empty", TypeKind::Object);
        let html = builder(&Schema::default()).object(&empty).unwrap();

        assert!(html.contains(r#"<span class="keyword operator ts">type</span> <span class="identifier">Empty</span> <span class="keyword operator ts">{</span>"#));
        assert!(html.ends_with("<li><span class=\"keyword operator ts\">}</span></li>\n"));
        assert!(!html.contains("implements"));
    }

    #[test]
    fn test_headers_use_base_url() {
        let context = PluginContext {
            base_url: "/docs/".to_string(),
        };
        let builder =
            HtmlSchemaBuilder::new(&Schema::default(), &HostOptions::default(), &context).unwrap();

        let headers = builder.headers();
        assert_eq!(headers[0], FONT_HEADER);
        assert_eq!(
            headers[1],
            r#"<link type="text/css" rel="stylesheet" href="/docs/assets/code.css" />"#
        );
    }

    #[test]
    fn test_no_assets_until_written() {
        assert!(builder(&Schema::default()).assets().is_empty());
    }

    #[test]
    fn test_assets_dir_receives_stylesheet() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("static");

        let builder = builder(&Schema::default()).with_assets_dir(&target).unwrap();
        let assets = builder.assets();

        assert_eq!(assets, vec![target.join("code.css")]);
        assert_eq!(fs::read_to_string(&assets[0]).unwrap(), STYLESHEET);
    }

    #[test]
    fn test_unwritable_assets_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = builder(&Schema::default())
            .with_assets_dir(file.path().join("static"))
            .unwrap_err();
        assert!(err.is_asset_error());
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        assert!(STYLESHEET.contains(".code"));
    }
}
