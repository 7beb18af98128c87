//! Look-ahead used to decide whether an optional nested struct exists.

use crate::key::{full_key, resolve_key};
use crate::schema::{FieldDescriptor, Schema};
use crate::source::EnvSource;

/// Reports whether any leaf key of `schema` is present in `source`.
///
/// `prefix` is the accumulated prefix of the enclosing structs; the schema's
/// own prefix is appended to it. Nested and optional nested fields are
/// searched recursively and the search stops at the first present key. Only
/// presence counts: an empty value is present.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use envbind::{FieldDescriptor, Schema, TypeTag, any_present};
///
/// let schema = Schema::new(
///     "Database",
///     vec![
///         FieldDescriptor::new("host", TypeTag::String),
///         FieldDescriptor::new("port", TypeTag::UnsignedInt(16)).with_default("5432"),
///     ],
/// );
///
/// assert!(!any_present(&schema, &HashMap::<&str, &str>::new(), ""));
/// assert!(any_present(&schema, &HashMap::from([("port", "")]), ""));
/// ```
#[must_use]
pub fn any_present<S: EnvSource + ?Sized>(schema: &Schema, source: &S, prefix: &str) -> bool {
    let scope = format!("{prefix}{}", schema.prefix());
    schema
        .fields()
        .iter()
        .any(|field| field_present(field, source, &scope))
}

fn field_present<S: EnvSource + ?Sized>(field: &FieldDescriptor, source: &S, scope: &str) -> bool {
    if let Some(key) = resolve_key(field)
        && source.contains(&full_key(scope, key))
    {
        return true;
    }
    field
        .nested_schema()
        .is_some_and(|nested| any_present(nested, source, scope))
}
