//! Flattened listing of the environment keys a schema consults.
//!
//! The listing is intended for documentation and diagnostics: it can be
//! rendered as a table of variables or, with the `serde` feature, emitted as
//! JSON by external tooling.

use crate::key::{full_key, join_path, resolve_key};

use super::{FieldDescriptor, Schema};

/// Whether a key must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Requirement {
    /// Loading fails without it.
    Required,
    /// The field is optional and resolves to absence without it.
    Optional,
    /// A declared default is used without it.
    Defaulted,
}

/// One environment key consulted by a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvKey {
    /// Full key, prefixes applied.
    pub key: String,
    /// Dotted field path from the root struct.
    pub field: String,
    /// Declared type of the field.
    pub type_name: String,
    /// Whether the key must be supplied.
    pub requirement: Requirement,
    /// Source text of the default expression, if any.
    pub default: Option<&'static str>,
    /// Path of the nearest optional nested ancestor. Required keys inside a
    /// group are only required once any key of the group is present.
    pub group: Option<String>,
}

impl Schema {
    /// Lists every environment key this schema would consult, depth first in
    /// declaration order. Skipped fields are omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::{FieldDescriptor, Requirement, Schema, TypeTag};
    ///
    /// let schema = Schema::new(
    ///     "Config",
    ///     vec![
    ///         FieldDescriptor::new("port", TypeTag::UnsignedInt(16)),
    ///         FieldDescriptor::new("debug", TypeTag::Bool).with_default("false"),
    ///     ],
    /// )
    /// .with_prefix("APP_");
    ///
    /// let keys = schema.env_keys();
    /// assert_eq!(keys[0].key, "APP_port");
    /// assert_eq!(keys[0].requirement, Requirement::Required);
    /// assert_eq!(keys[1].requirement, Requirement::Defaulted);
    /// ```
    #[must_use]
    pub fn env_keys(&self) -> Vec<EnvKey> {
        let mut keys = Vec::new();
        collect(self, "", "", None, &mut keys);
        keys
    }
}

fn collect(
    schema: &Schema,
    parent_scope: &str,
    parent_path: &str,
    group: Option<&str>,
    out: &mut Vec<EnvKey>,
) {
    let scope = format!("{parent_scope}{}", schema.prefix());
    for field in schema.fields() {
        let path = join_path(parent_path, field.name());
        if let Some(nested) = field.nested_schema() {
            let nested_group = if field.type_tag().is_optional() {
                Some(path.as_str())
            } else {
                group
            };
            collect(nested, &scope, &path, nested_group, out);
            continue;
        }
        let Some(key) = resolve_key(field) else {
            continue;
        };
        out.push(EnvKey {
            key: full_key(&scope, key).into_owned(),
            requirement: requirement(field),
            type_name: field.type_tag().type_name(),
            default: field.default(),
            group: group.map(str::to_owned),
            field: path,
        });
    }
}

const fn requirement(field: &FieldDescriptor) -> Requirement {
    if field.has_default() {
        Requirement::Defaulted
    } else if field.type_tag().is_optional() {
        Requirement::Optional
    } else {
        Requirement::Required
    }
}
