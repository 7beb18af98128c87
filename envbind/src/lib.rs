//! Type-directed population of structs from environment variables.
//!
//! Derive [`FromEnv`] on a struct and call [`load`] (process environment) or
//! [`load_from`] (any [`EnvSource`], such as a `HashMap`). Every field is
//! resolved independently, in declaration order: its key is read and parsed,
//! or its default is used, or it is left absent when optional, or the call
//! fails. Nested structs recurse, and an optional nested struct is populated
//! only when at least one of its leaf keys is present.
//!
//! ```
//! use std::collections::HashMap;
//! use envbind::{EnvValue, FromEnv};
//!
//! #[derive(Debug, PartialEq, EnvValue)]
//! enum Mode {
//!     Dev,
//!     Prod,
//! }
//!
//! #[derive(Debug, FromEnv)]
//! #[envbind(prefix = "APP_", rename_all = "SCREAMING_SNAKE_CASE")]
//! struct Config {
//!     name: String,
//!     port: u16,
//!     #[envbind(default)]
//!     debug: bool,
//!     #[envbind(default = Mode::Dev)]
//!     mode: Mode,
//!     #[envbind(nested)]
//!     database: Option<Database>,
//! }
//!
//! #[derive(Debug, FromEnv)]
//! #[envbind(prefix = "DB_", rename_all = "SCREAMING_SNAKE_CASE")]
//! struct Database {
//!     host: String,
//!     #[envbind(default = 5432)]
//!     port: u16,
//! }
//!
//! let source = HashMap::from([("APP_NAME", "svc"), ("APP_PORT", "8080")]);
//! let config: Config = envbind::load_from(&source)?;
//! assert_eq!(config.name, "svc");
//! assert_eq!(config.port, 8080);
//! assert!(!config.debug);
//! assert_eq!(config.mode, Mode::Dev);
//! assert!(config.database.is_none());
//! # Ok::<(), envbind::EnvError>(())
//! ```
//!
//! Field types without a built-in parser are rejected at compile time unless
//! the field declares a custom parser:
//!
//! ```compile_fail
//! use envbind::FromEnv;
//!
//! #[derive(FromEnv)]
//! struct Config {
//!     hosts: Vec<String>,
//! }
//! ```

pub use envbind_macros::{EnvValue, FromEnv};

mod error;
mod key;
mod parse;
mod parser;
mod populate;
mod presence;
mod schema;
mod source;
mod walker;

pub use error::{BoxError, EnvError, EnvResult, ErrorKind, ParseError};
pub use key::{full_key, resolve_key};
pub use parse::{EnvValue, TRUTHY, Value, match_variant, parse_value};
pub use parser::{EnvParser, ParseContext, Validator, make_validator};
pub use presence::any_present;
pub use schema::{
    EnvKey, FieldDescriptor, Mapping, ParserKind, ParserRef, Requirement, SKIP_MARKER, Schema,
    TypeTag,
};
pub use source::{EnvSource, SystemEnv};
pub use walker::Walker;

/// A struct that can be populated from an [`EnvSource`].
///
/// Normally derived with `#[derive(FromEnv)]`. A hand-written implementation
/// describes its fields in [`FromEnv::schema`] and builds itself in
/// [`FromEnv::populate`] with one [`Walker`] call per field.
pub trait FromEnv: Sized {
    /// Describes the struct's fields in declaration order.
    fn schema() -> Schema;

    /// Builds the struct from the walker's source.
    ///
    /// # Errors
    ///
    /// Returns the error of the first field that fails to resolve.
    fn populate<S: EnvSource + ?Sized>(walker: &Walker<'_, S>) -> EnvResult<Self>;

    /// Populates the struct from the process environment.
    ///
    /// # Errors
    ///
    /// See [`load`].
    fn load() -> EnvResult<Self> {
        load::<Self>()
    }

    /// Populates the struct from `source`.
    ///
    /// # Errors
    ///
    /// See [`load_from`].
    fn load_from<S: EnvSource + ?Sized>(source: &S) -> EnvResult<Self> {
        load_from::<Self, S>(source)
    }
}

/// Populates `T` from a snapshot of the process environment.
///
/// The snapshot is taken once at the start of the call and dropped when it
/// returns; values stored in `T` are owned copies.
///
/// # Errors
///
/// Returns the first field's [`EnvError`]; no partially populated value is
/// returned.
pub fn load<T: FromEnv>() -> EnvResult<T> {
    let env = SystemEnv::snapshot();
    load_from(&env)
}

/// Populates `T` from a caller-supplied source.
///
/// The source is only read.
///
/// # Errors
///
/// Returns the first field's [`EnvError`]; no partially populated value is
/// returned.
pub fn load_from<T: FromEnv, S: EnvSource + ?Sized>(source: &S) -> EnvResult<T> {
    let schema = T::schema();
    tracing::debug!(
        schema = schema.name(),
        prefix = schema.prefix(),
        "loading from environment source"
    );
    let walker = Walker::root(schema, source);
    T::populate(&walker)
}
