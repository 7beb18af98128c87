//! Built-in parsing driven by a run-time [`TypeTag`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::parse_bool;
use crate::error::ParseError;
use crate::schema::TypeTag;

/// Value produced by [`TypeTag::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text.
    String(String),
    /// Signed integer, widened.
    Int(i128),
    /// Unsigned integer, widened.
    UInt(u128),
    /// Floating point number, widened.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Matched enum variant name.
    Enum(&'static str),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Enum(variant) => f.write_str(variant),
        }
    }
}

impl TypeTag {
    /// Converts raw text according to this tag.
    ///
    /// Integers are checked against the declared width before widening.
    ///
    /// # Errors
    ///
    /// Returns the same [`ParseError`] kinds as the typed parsers, and
    /// [`ParseError::UnsupportedSchemaType`] for `Nested`, `Optional` and
    /// `Custom` tags or integer widths no primitive type has.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::{TypeTag, Value};
    ///
    /// assert_eq!(TypeTag::SignedInt(8).parse("-128"), Ok(Value::Int(-128)));
    /// assert!(TypeTag::SignedInt(8).parse("128").is_err());
    /// assert_eq!(TypeTag::Bool.parse("nope"), Ok(Value::Bool(false)));
    /// ```
    pub fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        match self {
            Self::String => Ok(Value::String(raw.to_owned())),
            Self::SignedInt(bits) => parse_signed(*bits, raw),
            Self::UnsignedInt(bits) => parse_unsigned(*bits, raw),
            Self::Float(32) => raw
                .parse::<f32>()
                .map(|value| Value::Float(f64::from(value)))
                .map_err(ParseError::InvalidFloat),
            Self::Float(64) => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(ParseError::InvalidFloat),
            Self::Bool => Ok(Value::Bool(parse_bool(raw))),
            Self::Enum { variants, .. } => variants
                .iter()
                .find(|variant| **variant == raw)
                .map(|variant| Value::Enum(*variant))
                .ok_or(ParseError::InvalidEnumValue {
                    expected: *variants,
                }),
            Self::Float(_) | Self::Nested(_) | Self::Optional(_) | Self::Custom(_) => {
                Err(ParseError::UnsupportedSchemaType {
                    type_name: self.type_name(),
                })
            }
        }
    }
}

fn widen<N, W>(raw: &str) -> Result<W, ParseIntError>
where
    N: FromStr<Err = ParseIntError>,
    W: From<N>,
{
    raw.parse::<N>().map(W::from)
}

fn parse_signed(bits: u32, raw: &str) -> Result<Value, ParseError> {
    let parsed = match bits {
        8 => widen::<i8, i128>(raw),
        16 => widen::<i16, i128>(raw),
        32 => widen::<i32, i128>(raw),
        64 => widen::<i64, i128>(raw),
        128 => raw.parse::<i128>(),
        _ => {
            return Err(ParseError::UnsupportedSchemaType {
                type_name: format!("i{bits}"),
            });
        }
    };
    parsed.map(Value::Int).map_err(ParseError::InvalidInteger)
}

fn parse_unsigned(bits: u32, raw: &str) -> Result<Value, ParseError> {
    let parsed = match bits {
        8 => widen::<u8, u128>(raw),
        16 => widen::<u16, u128>(raw),
        32 => widen::<u32, u128>(raw),
        64 => widen::<u64, u128>(raw),
        128 => raw.parse::<u128>(),
        _ => {
            return Err(ParseError::UnsupportedSchemaType {
                type_name: format!("u{bits}"),
            });
        }
    };
    parsed.map(Value::UInt).map_err(ParseError::InvalidInteger)
}
