//! Documents returned to the host.

use serde::{Deserialize, Serialize};

/// Opening markup placed before every rendered fragment.
pub const ENVELOPE_OPEN: &str =
    r#"<code class="highlight"><ul class="code" style="padding-left:28px">"#;

/// Closing markup placed after every rendered fragment.
pub const ENVELOPE_CLOSE: &str = "</ul></code>";

/// A titled HTML fragment.
///
/// # Examples
///
/// ```
/// use schema_docs_plugin::Document;
///
/// let document = Document::wrap("Definition", "scalar");
/// assert_eq!(document.title, "Definition");
/// assert_eq!(
///     document.description,
///     r#"<code class="highlight"><ul class="code" style="padding-left:28px">scalar</ul></code>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Section title shown by the host
    pub title: String,
    /// HTML body
    pub description: String,
}

impl Document {
    /// Wraps a rendered fragment in the code envelope.
    #[must_use]
    pub fn wrap(title: impl Into<String>, fragment: &str) -> Self {
        let mut description =
            String::with_capacity(ENVELOPE_OPEN.len() + fragment.len() + ENVELOPE_CLOSE.len());
        description.push_str(ENVELOPE_OPEN);
        description.push_str(fragment);
        description.push_str(ENVELOPE_CLOSE);

        Self {
            title: title.into(),
            description,
        }
    }
}
