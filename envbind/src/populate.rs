//! Per-field resolution: read, parse, fall back, or fail.

use tracing::{debug, trace};

use crate::error::{EnvError, EnvResult};
use crate::key::{full_key, resolve_key};
use crate::parse::EnvValue;
use crate::parser::{EnvParser, ParseContext};
use crate::schema::FieldDescriptor;
use crate::source::EnvSource;

/// Parser used when a field declares no custom parser.
pub(crate) struct BuiltIn;

impl<T: EnvValue> EnvParser<T> for BuiltIn {
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> EnvResult<T> {
        T::parse_env(raw).map_err(|err| ctx.invalid(err))
    }
}

/// Outcome of reading one scalar field from the source.
pub(crate) enum Resolution<T> {
    /// The key was present and its value parsed.
    Parsed(T),
    /// The field is skipped (`key` is `None`) or its key is not set.
    Unresolved { key: Option<String> },
}

/// Looks up and parses a scalar field.
///
/// A present key is always parsed, even when the value is empty; only absence
/// leads to [`Resolution::Unresolved`].
pub(crate) fn read_scalar<T, S, P>(
    field: &FieldDescriptor,
    source: &S,
    scope: &str,
    path: &str,
    parser: &P,
) -> EnvResult<Resolution<T>>
where
    S: EnvSource + ?Sized,
    P: EnvParser<T> + ?Sized,
{
    let Some(key) = resolve_key(field) else {
        trace!(field = path, "field is not mapped to an environment key");
        return Ok(Resolution::Unresolved { key: None });
    };
    let key = full_key(scope, key);
    let Some(raw) = source.get(&key) else {
        trace!(field = path, key = %key, "environment key is not set");
        return Ok(Resolution::Unresolved {
            key: Some(key.into_owned()),
        });
    };
    trace!(
        field = path,
        key = %key,
        custom = field.mapping().parser().is_some(),
        "parsing environment value"
    );
    parser
        .parse(raw, &ParseContext::new(path, &key))
        .map(Resolution::Parsed)
}

/// Finishes a required field: a parsed value wins, then the default, else
/// [`EnvError::MissingRequiredField`].
pub(crate) fn finish_required<T>(
    resolution: Resolution<T>,
    path: &str,
    fallback: impl FnOnce() -> Option<T>,
) -> EnvResult<T> {
    match resolution {
        Resolution::Parsed(value) => Ok(value),
        Resolution::Unresolved { key } => {
            let value = fallback().ok_or_else(|| EnvError::missing(path, key.as_deref()))?;
            debug!(field = path, "using default for required field");
            Ok(value)
        }
    }
}

/// Finishes an optional field: a parsed value wins, then the fallback, which
/// may itself be absence.
pub(crate) fn finish_optional<T>(
    resolution: Resolution<T>,
    path: &str,
    fallback: impl FnOnce() -> Option<T>,
) -> Option<T> {
    match resolution {
        Resolution::Parsed(value) => Some(value),
        Resolution::Unresolved { .. } => {
            let value = fallback();
            debug!(
                field = path,
                defaulted = value.is_some(),
                "optional field left unset"
            );
            value
        }
    }
}
