//! Failures raised by the built-in value parsers.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Conversion failure for a single raw value.
///
/// Parse errors carry no field context; the walker attaches the field path
/// and environment key when it lifts them into [`crate::EnvError`]. The raw
/// text is never included because environment values frequently hold
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Text is not a decimal integer that fits the declared width.
    #[error("invalid integer: {0}")]
    InvalidInteger(#[source] ParseIntError),

    /// Text is not a decimal floating point number.
    #[error("invalid float: {0}")]
    InvalidFloat(#[source] ParseFloatError),

    /// Text matches none of the declared enum variants.
    #[error("invalid enum value; expected one of: {}", .expected.join(", "))]
    InvalidEnumValue {
        /// Variant names accepted by the enum, in declaration order.
        expected: &'static [&'static str],
    },

    /// The type has no built-in parser.
    #[error("type `{type_name}` has no built-in parser")]
    UnsupportedSchemaType {
        /// Display name of the offending type.
        type_name: String,
    },
}
