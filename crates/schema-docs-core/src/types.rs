//! GraphQL introspection model.
//!
//! These types mirror the JSON produced by the standard GraphQL
//! introspection query (camelCase field names). The host parses a schema into
//! a [`Schema`] and hands it to the document plugin, which indexes the types
//! and directives by name.
//!
//! # Examples
//!
//! ```
//! use schema_docs_core::{Schema, TypeKind};
//!
//! let schema = Schema::from_json_str(r#"{
//!     "data": {
//!         "__schema": {
//!             "types": [{ "name": "Date", "kind": "SCALAR" }],
//!             "directives": []
//!         }
//!     }
//! }"#)?;
//!
//! assert_eq!(schema.types.len(), 1);
//! assert_eq!(schema.types[0].kind, TypeKind::Scalar);
//! # Ok::<(), schema_docs_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Category tag of a GraphQL type.
///
/// Serialized as the upper-case introspection tag (`"INPUT_OBJECT"`). Any
/// tag outside the GraphQL set is preserved as [`TypeKind::Other`] so that
/// hosts with extended kinds can still be indexed.
///
/// # Examples
///
/// ```
/// use schema_docs_core::TypeKind;
///
/// assert_eq!(TypeKind::from("ENUM"), TypeKind::Enum);
/// assert_eq!(TypeKind::from("OPERATION"), TypeKind::Other("OPERATION".to_string()));
/// assert!(TypeKind::Union.is_documentable());
/// assert!(!TypeKind::NonNull.is_documentable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeKind {
    /// `SCALAR`
    Scalar,
    /// `OBJECT`
    Object,
    /// `INTERFACE`
    Interface,
    /// `UNION`
    Union,
    /// `ENUM`
    Enum,
    /// `INPUT_OBJECT`
    InputObject,
    /// `LIST` wrapper (only appears in type references)
    List,
    /// `NON_NULL` wrapper (only appears in type references)
    NonNull,
    /// Any tag not defined by GraphQL
    Other(String),
}

impl TypeKind {
    /// Returns the introspection tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Other(tag) => tag,
        }
    }

    /// Returns `true` for the six kinds that produce a document.
    #[must_use]
    pub const fn is_documentable(&self) -> bool {
        matches!(
            self,
            Self::Scalar
                | Self::Object
                | Self::Interface
                | Self::Union
                | Self::Enum
                | Self::InputObject
        )
    }
}

impl From<&str> for TypeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "SCALAR" => Self::Scalar,
            "OBJECT" => Self::Object,
            "INTERFACE" => Self::Interface,
            "UNION" => Self::Union,
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TypeKind {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<TypeKind> for String {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a type from a field, argument or member list.
///
/// Wrapper kinds (`LIST`, `NON_NULL`) carry the wrapped type in `of_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    /// Kind of the referenced type
    pub kind: TypeKind,
    /// Name of the referenced type; `None` for wrappers
    #[serde(default)]
    pub name: Option<String>,
    /// Wrapped type for `LIST` and `NON_NULL`
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Creates a reference to a named type.
    #[must_use]
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// Wraps `inner` in a `LIST`.
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Wraps `inner` in a `NON_NULL`.
    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Returns the innermost named type, skipping wrappers.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_docs_core::{TypeKind, TypeRef};
    ///
    /// let ty = TypeRef::non_null(TypeRef::list(TypeRef::named(TypeKind::Scalar, "ID")));
    /// assert_eq!(ty.named_type(), Some("ID"));
    /// ```
    #[must_use]
    pub fn named_type(&self) -> Option<&str> {
        match (&self.name, &self.of_type) {
            (Some(name), _) => Some(name),
            (None, Some(inner)) => inner.named_type(),
            (None, None) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.of_type) {
            (TypeKind::List, Some(inner)) => write!(f, "[{inner}]"),
            (TypeKind::NonNull, Some(inner)) => write!(f, "{inner}!"),
            _ => f.write_str(self.name.as_deref().unwrap_or_default()),
        }
    }
}

/// Argument or input object field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDescriptor {
    /// Argument or field name
    pub name: String,
    /// Markdown description
    #[serde(default)]
    pub description: Option<String>,
    /// Declared type
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Default value as a GraphQL literal
    #[serde(default)]
    pub default_value: Option<String>,
}

/// Field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Markdown description
    #[serde(default)]
    pub description: Option<String>,
    /// Field arguments
    #[serde(default)]
    pub args: Vec<InputValueDescriptor>,
    /// Field result type
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Whether the field is deprecated
    #[serde(default)]
    pub is_deprecated: bool,
    /// Reason given in `@deprecated`
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Value of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDescriptor {
    /// Value name
    pub name: String,
    /// Markdown description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the value is deprecated
    #[serde(default)]
    pub is_deprecated: bool,
    /// Reason given in `@deprecated`
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Introspection record of a named schema type.
///
/// Only `name` and `kind` matter to document dispatch; the remaining fields
/// are read by renderers and are `None` when the kind does not define them.
///
/// # Examples
///
/// ```
/// use schema_docs_core::{TypeDescriptor, TypeKind};
///
/// let scalar = TypeDescriptor::new("DateTime", TypeKind::Scalar)
///     .with_description("ISO-8601 timestamp");
///
/// assert_eq!(scalar.name, "DateTime");
/// assert!(scalar.fields.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Unique type name
    pub name: String,
    /// Category tag
    pub kind: TypeKind,
    /// Markdown description
    #[serde(default)]
    pub description: Option<String>,
    /// Fields of `OBJECT` and `INTERFACE` types
    #[serde(default)]
    pub fields: Option<Vec<FieldDescriptor>>,
    /// Fields of `INPUT_OBJECT` types
    #[serde(default)]
    pub input_fields: Option<Vec<InputValueDescriptor>>,
    /// Interfaces implemented by `OBJECT` (and `INTERFACE`) types
    #[serde(default)]
    pub interfaces: Option<Vec<TypeRef>>,
    /// Values of `ENUM` types
    #[serde(default)]
    pub enum_values: Option<Vec<EnumValueDescriptor>>,
    /// Members of `UNION` types, implementors of `INTERFACE` types
    #[serde(default)]
    pub possible_types: Option<Vec<TypeRef>>,
}

impl TypeDescriptor {
    /// Creates a descriptor with only a name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Introspection record of a directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveDescriptor {
    /// Unique directive name, without the `@`
    pub name: String,
    /// Markdown description
    #[serde(default)]
    pub description: Option<String>,
    /// Locations the directive may appear at (`FIELD_DEFINITION`, ...)
    #[serde(default)]
    pub locations: Vec<String>,
    /// Directive arguments
    #[serde(default)]
    pub args: Vec<InputValueDescriptor>,
    /// Whether the directive may be repeated at one location
    #[serde(default)]
    pub is_repeatable: bool,
}

impl DirectiveDescriptor {
    /// Creates a directive descriptor with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: Vec::new(),
            args: Vec::new(),
            is_repeatable: false,
        }
    }
}

/// Name of a root operation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootTypeRef {
    /// Type name
    pub name: String,
}

/// Introspected GraphQL schema as supplied by the host.
///
/// Missing `types` or `directives` deserialize as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Every named type in the schema
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    /// Every directive in the schema
    #[serde(default)]
    pub directives: Vec<DirectiveDescriptor>,
    /// Root query type
    #[serde(default)]
    pub query_type: Option<RootTypeRef>,
    /// Root mutation type
    #[serde(default)]
    pub mutation_type: Option<RootTypeRef>,
    /// Root subscription type
    #[serde(default)]
    pub subscription_type: Option<RootTypeRef>,
}

impl Schema {
    /// Parses a schema from introspection JSON text.
    ///
    /// Accepts the bare schema object, a `{"__schema": ...}` wrapper or a
    /// full `{"data": {"__schema": ...}}` response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaParse`] if the text is not JSON or does not
    /// match the introspection shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| Error::SchemaParse {
            message: format!("invalid JSON: {e}"),
            source: Some(e),
        })?;

        Self::from_value(value)
    }

    /// Returns the root operation `type_name` serves, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_docs_core::{RootTypeRef, Schema};
    ///
    /// let schema = Schema {
    ///     query_type: Some(RootTypeRef { name: "Query".to_string() }),
    ///     ..Schema::default()
    /// };
    /// assert_eq!(schema.root_operation("Query"), Some("query"));
    /// assert_eq!(schema.root_operation("User"), None);
    /// ```
    #[must_use]
    pub fn root_operation(&self, type_name: &str) -> Option<&'static str> {
        [
            ("query", &self.query_type),
            ("mutation", &self.mutation_type),
            ("subscription", &self.subscription_type),
        ]
        .into_iter()
        .find_map(|(operation, root)| {
            root.as_ref()
                .filter(|root| root.name == type_name)
                .map(|_| operation)
        })
    }

    /// Builds a schema from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaParse`] if the value does not match the
    /// introspection shape.
    pub fn from_value(value: Value) -> Result<Self> {
        let value = unwrap_envelope(value);
        if !value.is_object() {
            return Err(Error::SchemaParse {
                message: "schema must be a JSON object".to_string(),
                source: None,
            });
        }

        serde_json::from_value(value).map_err(|e| Error::SchemaParse {
            message: format!("unexpected introspection shape: {e}"),
            source: Some(e),
        })
    }
}

fn unwrap_envelope(mut value: Value) -> Value {
    if let Some(data) = value.get_mut("data").map(Value::take) {
        value = data;
    }
    match value.get_mut("__schema").map(Value::take) {
        Some(schema) => schema,
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_round_trips_unknown_tag() {
        let kind: TypeKind = serde_json::from_value(json!("OPERATION")).unwrap();
        assert_eq!(kind, TypeKind::Other("OPERATION".to_string()));
        assert!(!kind.is_documentable());
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("OPERATION"));
    }

    #[test]
    fn test_documentable_kinds() {
        let documentable = [
            "SCALAR",
            "OBJECT",
            "INTERFACE",
            "UNION",
            "ENUM",
            "INPUT_OBJECT",
        ];
        for tag in documentable {
            assert!(TypeKind::from(tag).is_documentable(), "{tag}");
        }
        assert!(!TypeKind::List.is_documentable());
        assert!(!TypeKind::from("scalar").is_documentable());
    }

    #[test]
    fn test_type_ref_display() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named(
            TypeKind::Object,
            "User",
        ))));
        assert_eq!(ty.to_string(), "[User!]!");
        assert_eq!(ty.named_type(), Some("User"));
    }

    #[test]
    fn test_descriptor_from_introspection_json() {
        let descriptor: TypeDescriptor = serde_json::from_value(json!({
            "name": "Query",
            "kind": "OBJECT",
            "description": null,
            "fields": [{
                "name": "user",
                "args": [{
                    "name": "id",
                    "type": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null } },
                    "defaultValue": null
                }],
                "type": { "kind": "OBJECT", "name": "User", "ofType": null },
                "isDeprecated": false,
                "deprecationReason": null
            }],
            "inputFields": null,
            "interfaces": [],
            "enumValues": null,
            "possibleTypes": null
        }))
        .unwrap();

        assert_eq!(descriptor.kind, TypeKind::Object);
        let fields = descriptor.fields.unwrap();
        assert_eq!(fields[0].args[0].type_ref.to_string(), "ID!");
        assert_eq!(fields[0].type_ref.named_type(), Some("User"));
    }

    #[test]
    fn test_schema_envelopes() {
        let bare = json!({ "types": [{ "name": "A", "kind": "SCALAR" }] });
        let wrapped = json!({ "__schema": bare.clone() });
        let response = json!({ "data": { "__schema": bare.clone() } });

        for value in [bare, wrapped, response] {
            let schema = Schema::from_value(value).unwrap();
            assert_eq!(schema.types.len(), 1);
            assert!(schema.directives.is_empty());
        }
    }

    #[test]
    fn test_schema_missing_lists_default_to_empty() {
        let schema = Schema::from_json_str("{}").unwrap();
        assert!(schema.types.is_empty());
        assert!(schema.directives.is_empty());
        assert!(schema.query_type.is_none());
    }

    #[test]
    fn test_root_operations() {
        let schema = Schema::from_value(json!({
            "queryType": { "name": "Query" },
            "mutationType": { "name": "Mutation" },
            "subscriptionType": null,
            "types": []
        }))
        .unwrap();

        assert_eq!(schema.root_operation("Query"), Some("query"));
        assert_eq!(schema.root_operation("Mutation"), Some("mutation"));
        assert_eq!(schema.root_operation("Subscription"), None);
        assert_eq!(schema.root_operation("query"), None);
    }

    #[test]
    fn test_schema_rejects_non_object() {
        let err = Schema::from_json_str("[1, 2]").unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_schema_rejects_bad_shape() {
        let err = Schema::from_json_str(r#"{ "types": [{ "kind": "SCALAR" }] }"#).unwrap_err();
        assert!(err.is_schema_error());
    }
}
