//! Runtime description of a target struct.
//!
//! A [`Schema`] is normally produced by `#[derive(FromEnv)]`; it lists the
//! struct's fields in declaration order together with their declared type,
//! whether a default exists, and how each field maps onto an environment key.
//! Hand-built schemas are equally valid and drive the same machinery.

mod describe;
mod mapping;
mod type_tag;

pub use describe::{EnvKey, Requirement};
pub use mapping::{Mapping, ParserKind, ParserRef, SKIP_MARKER};
pub use type_tag::TypeTag;

/// Ordered field descriptors for one struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: &'static str,
    prefix: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Creates a schema with no key prefix.
    #[must_use]
    pub const fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name,
            prefix: "",
            fields,
        }
    }

    /// Sets the prefix prepended to every key resolved inside this schema.
    #[must_use]
    pub const fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Name of the described type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Key prefix declared on the struct; empty when none was declared.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Field descriptors in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a field by its declared name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Declaration of a single struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    type_tag: TypeTag,
    default: Option<&'static str>,
    mapping: Mapping,
}

impl FieldDescriptor {
    /// Describes a field with no default and no mapping override.
    #[must_use]
    pub const fn new(name: &'static str, type_tag: TypeTag) -> Self {
        Self {
            name,
            type_tag,
            default: None,
            mapping: Mapping::Unspecified,
        }
    }

    /// Replaces the key mapping.
    #[must_use]
    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Marks the field as having a default, recording its source text.
    #[must_use]
    pub const fn with_default(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    /// Declared field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type.
    #[must_use]
    pub const fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    /// Source text of the default expression, if one was declared.
    #[must_use]
    pub const fn default(&self) -> Option<&'static str> {
        self.default
    }

    /// Whether a default value was declared.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Key mapping.
    #[must_use]
    pub const fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Schema of the nested struct, for `Nested` and `Optional(Nested)`
    /// fields.
    #[must_use]
    pub fn nested_schema(&self) -> Option<&Schema> {
        self.type_tag.nested_schema()
    }
}
