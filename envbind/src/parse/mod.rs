//! Built-in, type-directed conversion of raw text.
//!
//! [`EnvValue`] is implemented for `String`, `bool`, every primitive integer
//! and float type, and for enums deriving it. [`parse_value`] exposes the
//! same conversion to custom parsers, and [`TypeTag::parse`] performs it for a
//! type known only at run time.

mod dynamic;
mod primitives;

pub use dynamic::Value;

use crate::error::ParseError;
use crate::schema::TypeTag;

/// Case-insensitive spellings that parse as `true`. Everything else is
/// `false`.
pub const TRUTHY: [&str; 3] = ["true", "1", "yes"];

/// A type the engine can convert from raw text without a custom parser.
///
/// Derive it for unit-only enums with `#[derive(EnvValue)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no built-in environment parser",
    label = "unsupported field type",
    note = "declare `#[envbind(parser = ...)]` on the field, mark nested structs with \
            `#[envbind(nested)]`, or derive `EnvValue` for unit-only enums"
)]
pub trait EnvValue: Sized {
    /// Type tag recorded in schemas for fields of this type.
    fn type_tag() -> TypeTag;

    /// Converts raw text into a value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the text is not a valid representation.
    fn parse_env(raw: &str) -> Result<Self, ParseError>;
}

/// Runs the built-in parser for `T`.
///
/// Custom parsers use this to compose with built-in parsing.
///
/// # Errors
///
/// Returns a [`ParseError`] when `raw` is not a valid `T`.
///
/// # Examples
///
/// ```
/// use envbind::{ParseError, parse_value};
///
/// assert_eq!(parse_value::<i16>("-42"), Ok(-42));
/// assert_eq!(parse_value::<bool>("YES"), Ok(true));
/// assert_eq!(parse_value::<bool>("maybe"), Ok(false));
/// assert!(matches!(parse_value::<u8>("256"), Err(ParseError::InvalidInteger(_))));
/// ```
pub fn parse_value<T: EnvValue>(raw: &str) -> Result<T, ParseError> {
    T::parse_env(raw)
}

/// Permissive boolean conversion; never fails.
pub(crate) fn parse_bool(raw: &str) -> bool {
    TRUTHY.iter().any(|truthy| raw.eq_ignore_ascii_case(truthy))
}

/// Matches `raw` against enum variant names, case-sensitively.
///
/// Returns the index of the matching variant. Used by `#[derive(EnvValue)]`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidEnumValue`] when no variant matches.
pub fn match_variant(raw: &str, variants: &'static [&'static str]) -> Result<usize, ParseError> {
    variants
        .iter()
        .position(|variant| *variant == raw)
        .ok_or(ParseError::InvalidEnumValue { expected: variants })
}
