//! Coarse classification of binding failures.

use std::fmt;

/// Category of an [`EnvError`](crate::EnvError), independent of field
/// context.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use envbind::{ErrorKind, FromEnv};
///
/// #[derive(FromEnv)]
/// struct Config {
///     port: u16,
/// }
///
/// let source = HashMap::from([("port", "http")]);
/// let err = Config::load_from(&source).err();
/// assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::InvalidInteger));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required field had no resolvable, present key and no default.
    MissingRequiredField,
    /// Malformed integer text for the declared width.
    InvalidInteger,
    /// Malformed float text.
    InvalidFloat,
    /// Text did not match any enum variant.
    InvalidEnumValue,
    /// A custom parser or validator rejected the value.
    CustomParserError,
    /// The declared type has no parser.
    UnsupportedSchemaType,
    /// A populate body referenced a field its schema does not declare.
    UnknownField,
}

impl ErrorKind {
    /// Stable identifier for the kind, suitable for logs and metrics labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing_required_field",
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidFloat => "invalid_float",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::CustomParserError => "custom_parser_error",
            Self::UnsupportedSchemaType => "unsupported_schema_type",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
