//! Primary error enum for binding flows.

use thiserror::Error;

use super::{ErrorKind, ParseError};

/// Boxed, thread-safe error returned by custom parsers and validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type EnvResult<T> = Result<T, EnvError>;

/// Errors that abort a [`load`](crate::load) or [`load_from`](crate::load_from)
/// call.
///
/// The first failing field ends the call; no partially populated value is
/// ever returned. `field` is the dotted path from the root struct, for
/// example `database.port`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// A required field has no resolvable, present key and no default.
    #[error("missing required field '{field}'{}", describe_key(.key.as_deref()))]
    MissingRequiredField {
        /// Dotted path of the field.
        field: String,
        /// Environment key that was consulted, or `None` when the field is
        /// skipped.
        key: Option<String>,
    },

    /// The built-in parser rejected the raw value.
    #[error("invalid value for '{field}' from environment key '{key}': {source}")]
    InvalidValue {
        /// Dotted path of the field.
        field: String,
        /// Environment key the raw value was read from.
        key: String,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// A custom parser or validator rejected the raw value.
    #[error("custom parser for '{field}' rejected environment key '{key}': {source}")]
    Custom {
        /// Dotted path of the field.
        field: String,
        /// Environment key the raw value was read from.
        key: String,
        /// Error returned by the user-supplied function, unchanged.
        #[source]
        source: BoxError,
    },

    /// A populate body asked for a field its schema does not declare.
    #[error("schema '{schema}' declares no field named '{field}'")]
    UnknownField {
        /// Name of the schema that was searched.
        schema: &'static str,
        /// Field name that was requested.
        field: String,
    },
}

fn describe_key(key: Option<&str>) -> String {
    key.map_or_else(
        || String::from(" (field is not mapped to an environment key)"),
        |name| format!(" (environment key '{name}' is not set)"),
    )
}

impl EnvError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            Self::InvalidValue { source, .. } => match source {
                ParseError::InvalidInteger(_) => ErrorKind::InvalidInteger,
                ParseError::InvalidFloat(_) => ErrorKind::InvalidFloat,
                ParseError::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
                ParseError::UnsupportedSchemaType { .. } => ErrorKind::UnsupportedSchemaType,
            },
            Self::Custom { .. } => ErrorKind::CustomParserError,
            Self::UnknownField { .. } => ErrorKind::UnknownField,
        }
    }

    /// Dotted path of the field that failed, when the error concerns one.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field, .. }
            | Self::InvalidValue { field, .. }
            | Self::Custom { field, .. }
            | Self::UnknownField { field, .. } => field,
        }
    }

    /// Environment key involved in the failure, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { key, .. } => key.as_deref(),
            Self::InvalidValue { key, .. } | Self::Custom { key, .. } => Some(key),
            Self::UnknownField { .. } => None,
        }
    }
}
