//! Custom parsers and validators attached to individual fields.
//!
//! A field declared with `#[envbind(parser = path)]` is converted by `path`
//! instead of the built-in parser. Any function or closure with the signature
//! `Fn(&str, &ParseContext<'_>) -> Result<T, E>` qualifies, where `E` converts
//! into a [`BoxError`]; its error reaches the caller unchanged as the source of
//! an [`EnvError::Custom`].
//!
//! `#[envbind(validate = path)]` is shorthand for a parser built by
//! [`make_validator`]: the built-in parser runs first and `path` then inspects
//! the typed value.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{BoxError, EnvError, EnvResult, ParseError};
use crate::parse::EnvValue;

/// Field context handed to custom parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext<'a> {
    field: &'a str,
    key: &'a str,
}

impl<'a> ParseContext<'a> {
    /// Creates a context for the field at dotted path `field`, read from
    /// environment key `key`.
    #[must_use]
    pub const fn new(field: &'a str, key: &'a str) -> Self {
        Self { field, key }
    }

    /// Dotted path of the field being populated.
    #[must_use]
    pub const fn field(&self) -> &'a str {
        self.field
    }

    /// Environment key the raw value came from, prefix included.
    #[must_use]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// Wraps a user error as [`EnvError::Custom`] for this field.
    #[must_use]
    pub fn error(&self, source: impl Into<BoxError>) -> EnvError {
        EnvError::custom(self.field, self.key, source)
    }

    /// Wraps a built-in parse failure as [`EnvError::InvalidValue`] for this
    /// field.
    #[must_use]
    pub fn invalid(&self, source: ParseError) -> EnvError {
        EnvError::invalid(self.field, self.key, source)
    }
}

/// Converts the raw text of one field into a value.
///
/// Implemented for every `Fn(&str, &ParseContext<'_>) -> Result<T, E>` and for
/// the [`Validator`] returned by [`make_validator`].
pub trait EnvParser<T> {
    /// Parses `raw` for the field described by `ctx`.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvError`] carrying the field path and key from `ctx`.
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> EnvResult<T>;
}

impl<T, E, F> EnvParser<T> for F
where
    F: Fn(&str, &ParseContext<'_>) -> Result<T, E>,
    E: Into<BoxError>,
{
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> EnvResult<T> {
        self(raw, ctx).map_err(|err| ctx.error(err))
    }
}

/// Parser that applies the built-in conversion for `T` and then a check.
///
/// Built by [`make_validator`].
pub struct Validator<T, F> {
    check: F,
    marker: PhantomData<fn() -> T>,
}

impl<T, F> fmt::Debug for Validator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T, F, E> EnvParser<T> for Validator<T, F>
where
    T: EnvValue,
    F: Fn(T) -> Result<T, E>,
    E: Into<BoxError>,
{
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> EnvResult<T> {
        let value = T::parse_env(raw).map_err(|err| ctx.invalid(err))?;
        (self.check)(value).map_err(|err| ctx.error(err))
    }
}

/// Builds a custom parser from a check over the typed value.
///
/// The returned parser runs the built-in parser for `T` first; text it
/// rejects yields the usual [`EnvError::InvalidValue`]. The parsed value is
/// then passed to `check`, whose error becomes an [`EnvError::Custom`] and
/// whose success value is stored in the field.
///
/// # Examples
///
/// ```
/// use envbind::{EnvParser, ErrorKind, ParseContext, make_validator};
///
/// fn below_1024(port: u32) -> Result<u32, String> {
///     if port < 1024 { Ok(port) } else { Err(format!("{port} is not privileged")) }
/// }
///
/// let parser = make_validator(below_1024);
/// let ctx = ParseContext::new("port", "PORT");
/// assert_eq!(parser.parse("80", &ctx).ok(), Some(80));
///
/// let err = parser.parse("99999", &ctx).err().map(|err| err.kind());
/// assert_eq!(err, Some(ErrorKind::CustomParserError));
///
/// let err = parser.parse("eighty", &ctx).err().map(|err| err.kind());
/// assert_eq!(err, Some(ErrorKind::InvalidInteger));
/// ```
#[must_use]
pub const fn make_validator<T, F, E>(check: F) -> Validator<T, F>
where
    T: EnvValue,
    F: Fn(T) -> Result<T, E>,
    E: Into<BoxError>,
{
    Validator {
        check,
        marker: PhantomData,
    }
}
