//! Inline markup for type references, arguments and deprecations.
//!
//! These pieces are assembled in Rust and inserted into the templates
//! unescaped, so every piece of schema text is escaped here.

use handlebars::html_escape;
use schema_docs_core::{InputValueDescriptor, TypeKind, TypeRef};
use std::collections::HashSet;

/// Builds links to the pages of named types.
#[derive(Debug, Clone)]
pub struct Linker {
    base_url: String,
    known_types: HashSet<String>,
}

impl Linker {
    /// Creates a linker for the given type names.
    ///
    /// Only names in `known_types` are linked; any other name is rendered as
    /// plain text so generated pages never point at missing documents.
    #[must_use]
    pub fn new(base_url: impl Into<String>, known_types: HashSet<String>) -> Self {
        Self {
            base_url: base_url.into(),
            known_types,
        }
    }

    /// Page URL of the named type: `{base_url}{lowercase name}.doc.html`.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_docs_html::markup::Linker;
    /// use std::collections::HashSet;
    ///
    /// let linker = Linker::new("/docs/", HashSet::new());
    /// assert_eq!(linker.url("PageInfo"), "/docs/pageinfo.doc.html");
    /// ```
    #[must_use]
    pub fn url(&self, name: &str) -> String {
        format!("{}{}.doc.html", self.base_url, name.to_lowercase())
    }

    /// Renders a named type, linked when it is documented.
    #[must_use]
    pub fn named(&self, name: &str) -> String {
        if self.known_types.contains(name) {
            format!(
                r#"<a class="support type" href="{}">{}</a>"#,
                html_escape(&self.url(name)),
                html_escape(name)
            )
        } else {
            format!(r#"<span class="support type">{}</span>"#, html_escape(name))
        }
    }

    /// Renders a type reference with `[...]` and `!` wrappers.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_docs_core::{TypeKind, TypeRef};
    /// use schema_docs_html::markup::Linker;
    /// use std::collections::HashSet;
    ///
    /// let linker = Linker::new("./", HashSet::new());
    /// let ty = TypeRef::non_null(TypeRef::list(TypeRef::named(TypeKind::Scalar, "ID")));
    /// assert_eq!(linker.type_ref(&ty), r#"[<span class="support type">ID</span>]!"#);
    /// ```
    #[must_use]
    pub fn type_ref(&self, type_ref: &TypeRef) -> String {
        match (&type_ref.kind, &type_ref.of_type) {
            (TypeKind::List, Some(inner)) => format!("[{}]", self.type_ref(inner)),
            (TypeKind::NonNull, Some(inner)) => format!("{}!", self.type_ref(inner)),
            _ => self.named(type_ref.name.as_deref().unwrap_or_default()),
        }
    }

    /// Renders an argument list, or nothing when `args` is empty.
    #[must_use]
    pub fn arguments(&self, args: &[InputValueDescriptor]) -> String {
        if args.is_empty() {
            return String::new();
        }

        let rendered: Vec<String> = args
            .iter()
            .map(|arg| {
                format!(
                    r#"<span class="variable parameter">{}</span>: {}{}"#,
                    html_escape(&arg.name),
                    self.type_ref(&arg.type_ref),
                    default_value(arg.default_value.as_deref())
                )
            })
            .collect();

        format!("({})", rendered.join(", "))
    }
}

/// Renders ` = value`, or nothing without a default.
#[must_use]
pub fn default_value(value: Option<&str>) -> String {
    value.map_or_else(String::new, |value| {
        format!(r#" = <span class="constant">{}</span>"#, html_escape(value))
    })
}

/// Renders the `@deprecated` marker, or nothing for live entries.
///
/// # Examples
///
/// ```
/// use schema_docs_html::markup::deprecation;
///
/// assert_eq!(deprecation(false, Some("old")), "");
/// assert!(deprecation(true, None).contains("@deprecated"));
/// assert!(deprecation(true, Some("Use id")).contains("Use id"));
/// ```
#[must_use]
pub fn deprecation(is_deprecated: bool, reason: Option<&str>) -> String {
    if !is_deprecated {
        return String::new();
    }

    let mut html = String::from(r#" <span class="keyword operator ts">@deprecated</span>"#);
    if let Some(reason) = reason.filter(|r| !r.is_empty()) {
        html.push_str(&format!(
            r#"(reason: <span class="string">"{}"</span>)"#,
            html_escape(reason)
        ));
    }
    html
}

/// Splits a description into comment lines.
///
/// Text is returned unescaped; templates escape it.
#[must_use]
pub fn comment_lines(description: Option<&str>) -> Vec<String> {
    description
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| text.lines().map(|line| line.trim_end().to_string()).collect())
        .unwrap_or_default()
}
