//! [`EnvValue`] implementations for primitive types.

use super::{EnvValue, parse_bool};
use crate::error::ParseError;
use crate::schema::TypeTag;

impl EnvValue for String {
    fn type_tag() -> TypeTag {
        TypeTag::String
    }

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_owned())
    }
}

impl EnvValue for bool {
    fn type_tag() -> TypeTag {
        TypeTag::Bool
    }

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(parse_bool(raw))
    }
}

macro_rules! integer_values {
    ($tag:ident: $($ty:ty),+ $(,)?) => {$(
        impl EnvValue for $ty {
            fn type_tag() -> TypeTag {
                TypeTag::$tag(<$ty>::BITS)
            }

            fn parse_env(raw: &str) -> Result<Self, ParseError> {
                raw.parse::<$ty>().map_err(ParseError::InvalidInteger)
            }
        }
    )+};
}

integer_values!(SignedInt: i8, i16, i32, i64, i128, isize);
integer_values!(UnsignedInt: u8, u16, u32, u64, u128, usize);

macro_rules! float_values {
    ($($ty:ty => $bits:literal),+ $(,)?) => {$(
        impl EnvValue for $ty {
            fn type_tag() -> TypeTag {
                TypeTag::Float($bits)
            }

            fn parse_env(raw: &str) -> Result<Self, ParseError> {
                raw.parse::<$ty>().map_err(ParseError::InvalidFloat)
            }
        }
    )+};
}

float_values!(f32 => 32, f64 => 64);
