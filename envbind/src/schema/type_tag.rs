//! Declared field types as seen by the engine.

use super::Schema;

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    /// UTF-8 text.
    String,
    /// Signed integer of the given bit width.
    SignedInt(u32),
    /// Unsigned integer of the given bit width.
    UnsignedInt(u32),
    /// Floating point number of the given bit width.
    Float(u32),
    /// Boolean.
    Bool,
    /// Unit-only enum matched by variant name.
    Enum {
        /// Enum type name.
        name: &'static str,
        /// Accepted variant names, in declaration order.
        variants: &'static [&'static str],
    },
    /// Nested struct populated from its own leaf keys.
    Nested(Schema),
    /// Optional wrapper around another type.
    Optional(Box<TypeTag>),
    /// Type handled only by a field's custom parser.
    Custom(&'static str),
}

impl TypeTag {
    /// Wraps `inner` in [`TypeTag::Optional`].
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Whether the tag is [`TypeTag::Optional`].
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Schema of a `Nested` tag, looking through one `Optional` layer.
    #[must_use]
    pub fn nested_schema(&self) -> Option<&Schema> {
        match self {
            Self::Nested(schema) => Some(schema),
            Self::Optional(inner) => match inner.as_ref() {
                Self::Nested(schema) => Some(schema),
                _ => None,
            },
            _ => None,
        }
    }

    /// Human-readable type name, e.g. `u16` or `Option<Database>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::TypeTag;
    /// assert_eq!(TypeTag::UnsignedInt(16).type_name(), "u16");
    /// assert_eq!(TypeTag::optional(TypeTag::Bool).type_name(), "Option<bool>");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::String => String::from("String"),
            Self::SignedInt(bits) => format!("i{bits}"),
            Self::UnsignedInt(bits) => format!("u{bits}"),
            Self::Float(bits) => format!("f{bits}"),
            Self::Bool => String::from("bool"),
            Self::Enum { name, .. } | Self::Custom(name) => (*name).to_owned(),
            Self::Nested(schema) => schema.name().to_owned(),
            Self::Optional(inner) => format!("Option<{}>", inner.type_name()),
        }
    }
}
