//! Template engine for schema fragments using Handlebars.
//!
//! Provides a wrapper around Handlebars with pre-registered templates, one
//! per fragment layout. Templates escape schema text themselves; values
//! already converted to markup are inserted with triple braces.
//!
//! # Examples
//!
//! ```
//! use schema_docs_html::template_engine::{TemplateEngine, TemplateName};
//!
//! let engine = TemplateEngine::new().unwrap();
//! assert!(engine.has_template(TemplateName::Scalar));
//! ```

use handlebars::Handlebars;
use schema_docs_core::{Error, Result};
use serde::Serialize;

/// Registered fragment templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    /// `scalar Name`
    Scalar,
    /// Types with a field block: `type`, `interface`, `input`
    Fields,
    /// `union Name = A | B`
    Union,
    /// `enum Name { ... }`
    Enum,
    /// `directive @name(...) on ...`
    Directive,
}

impl TemplateName {
    /// All templates, in registration order.
    pub const ALL: [Self; 5] = [
        Self::Scalar,
        Self::Fields,
        Self::Union,
        Self::Enum,
        Self::Directive,
    ];

    /// Name the template is registered under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Fields => "fields",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Directive => "directive",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Scalar => include_str!("../templates/scalar.html.hbs"),
            Self::Fields => include_str!("../templates/fields.html.hbs"),
            Self::Union => include_str!("../templates/union.html.hbs"),
            Self::Enum => include_str!("../templates/enum.html.hbs"),
            Self::Directive => include_str!("../templates/directive.html.hbs"),
        }
    }
}

/// Template engine for schema fragments.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        Self::register_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers all built-in Handlebars templates.
    fn register_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        for template in TemplateName::ALL {
            handlebars
                .register_template_string(template.as_str(), template.source())
                .map_err(|e| Error::TemplateError {
                    message: format!("Failed to register {} template: {e}", template.as_str()),
                    source: None,
                })?;
        }

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if the context cannot be serialized or a variable the
    /// template uses is missing from it.
    pub fn render<T: Serialize>(&self, template: TemplateName, context: &T) -> Result<String> {
        self.handlebars
            .render(template.as_str(), context)
            .map_err(|e| Error::TemplateError {
                message: format!("{} template rendering failed: {e}", template.as_str()),
                source: Some(Box::new(e)),
            })
    }

    /// Checks if a template is registered.
    #[inline]
    #[must_use]
    pub fn has_template(&self, template: TemplateName) -> bool {
        self.handlebars.has_template(template.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_engine_new() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_all_templates_registered() {
        let engine = TemplateEngine::new().unwrap();
        for template in TemplateName::ALL {
            assert!(engine.has_template(template), "{}", template.as_str());
        }
    }

    #[test]
    fn test_render_scalar_escapes_text() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({ "name": "Date", "description": ["<b>day</b>"] });

        let html = engine.render(TemplateName::Scalar, &context).unwrap();
        assert!(html.contains(r#"<span class="identifier">Date</span>"#));
        assert!(html.contains("&lt;b&gt;day"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_fields() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render(TemplateName::Scalar, &json!({ "description": [] }))
            .unwrap_err();
        assert!(err.is_template_error());
    }
}
