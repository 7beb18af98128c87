//! Error types produced while binding environment values.

mod constructors;
mod kind;
mod parse;
mod types;

pub use kind::ErrorKind;
pub use parse::ParseError;
pub use types::{BoxError, EnvError, EnvResult};
