//! Key resolution for individual fields.

use std::borrow::Cow;

use crate::schema::{FieldDescriptor, Mapping, SKIP_MARKER};

/// Derives the environment key a field is looked up under.
///
/// Returns `None` when the field must not be looked up: its mapping skips it,
/// or it is a nested struct whose leaves carry their own keys. The result
/// excludes any struct prefix; see [`full_key`].
///
/// # Examples
///
/// ```
/// use envbind::{FieldDescriptor, Mapping, TypeTag, resolve_key};
///
/// let plain = FieldDescriptor::new("port", TypeTag::UnsignedInt(16));
/// assert_eq!(resolve_key(&plain), Some("port"));
///
/// let renamed = plain.clone().with_mapping(Mapping::Literal("HTTP_PORT"));
/// assert_eq!(resolve_key(&renamed), Some("HTTP_PORT"));
///
/// let skipped = plain.with_mapping(Mapping::Literal("-"));
/// assert_eq!(resolve_key(&skipped), None);
/// ```
#[must_use]
pub fn resolve_key(field: &FieldDescriptor) -> Option<&'static str> {
    if field.nested_schema().is_some() {
        return None;
    }
    match field.mapping() {
        Mapping::Unspecified | Mapping::Keyed { key: None, .. } => Some(field.name()),
        Mapping::Literal(key) | Mapping::Keyed { key: Some(key), .. } => {
            (*key != SKIP_MARKER).then_some(*key)
        }
        Mapping::Skipped => None,
    }
}

/// Prepends the accumulated struct prefix to a resolved key.
#[must_use]
pub fn full_key<'k>(prefix: &str, key: &'k str) -> Cow<'k, str> {
    if prefix.is_empty() {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("{prefix}{key}"))
    }
}

/// Joins a parent field path and a field name with a dot.
pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}
