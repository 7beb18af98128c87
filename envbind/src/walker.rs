//! Schema walker driving the population of one struct.
//!
//! `#[derive(FromEnv)]` generates a `populate` body that builds the struct
//! literal field by field, in declaration order, calling one walker method per
//! field. The walker owns the struct's [`Schema`] together with the prefix
//! scope and dotted path accumulated from its ancestors, and recurses by
//! building child walkers for nested fields.

use tracing::{debug, trace};

use crate::FromEnv;
use crate::error::{EnvError, EnvResult};
use crate::key::join_path;
use crate::parse::EnvValue;
use crate::parser::EnvParser;
use crate::populate::{self, BuiltIn};
use crate::presence::any_present;
use crate::schema::{FieldDescriptor, Schema};
use crate::source::EnvSource;

/// Walks the fields of one struct against an [`EnvSource`].
#[derive(Debug)]
pub struct Walker<'a, S: ?Sized> {
    schema: Schema,
    source: &'a S,
    scope: String,
    path: String,
}

impl<'a, S: EnvSource + ?Sized> Walker<'a, S> {
    /// Creates the walker for a top-level struct.
    #[must_use]
    pub fn root(schema: Schema, source: &'a S) -> Self {
        let scope = schema.prefix().to_owned();
        Self {
            schema,
            source,
            scope,
            path: String::new(),
        }
    }

    fn child(&self, name: &str, schema: Schema) -> Self {
        let scope = format!("{}{}", self.scope, schema.prefix());
        Self {
            schema,
            source: self.source,
            scope,
            path: join_path(&self.path, name),
        }
    }

    /// Schema of the struct being populated.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Source values are read from.
    #[must_use]
    pub const fn source(&self) -> &'a S {
        self.source
    }

    /// Prefix prepended to every key of this struct, ancestors included.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Dotted path of this struct from the root; empty for the root itself.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    fn descriptor(&self, name: &str) -> EnvResult<&FieldDescriptor> {
        self.schema
            .field(name)
            .ok_or_else(|| EnvError::UnknownField {
                schema: self.schema.name(),
                field: join_path(&self.path, name),
            })
    }

    /// Populates a required scalar field with the built-in parser.
    ///
    /// `fallback` supplies the declared default and returns `None` when the
    /// field has none.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingRequiredField`] when the key is skipped or
    /// unset and `fallback` yields nothing, [`EnvError::InvalidValue`] when the
    /// value does not parse, and [`EnvError::UnknownField`] when the schema
    /// has no field called `name`.
    pub fn required<T: EnvValue>(
        &self,
        name: &str,
        fallback: impl FnOnce() -> Option<T>,
    ) -> EnvResult<T> {
        self.required_with(name, &BuiltIn, fallback)
    }

    /// Populates a required scalar field with `parser`.
    ///
    /// # Errors
    ///
    /// As [`Walker::required`], with parse failures reported by `parser`.
    pub fn required_with<T, P: EnvParser<T> + ?Sized>(
        &self,
        name: &str,
        parser: &P,
        fallback: impl FnOnce() -> Option<T>,
    ) -> EnvResult<T> {
        let field = self.descriptor(name)?;
        let path = join_path(&self.path, name);
        let resolution = populate::read_scalar(field, self.source, &self.scope, &path, parser)?;
        populate::finish_required(resolution, &path, fallback)
    }

    /// Populates an `Option<T>` scalar field with the built-in parser.
    ///
    /// An unset or skipped key yields `fallback()`, which is `None` unless the
    /// field declares a default.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidValue`] when a present value does not parse
    /// and [`EnvError::UnknownField`] for an undeclared `name`.
    pub fn optional<T: EnvValue>(
        &self,
        name: &str,
        fallback: impl FnOnce() -> Option<T>,
    ) -> EnvResult<Option<T>> {
        self.optional_with(name, &BuiltIn, fallback)
    }

    /// Populates an `Option<T>` scalar field with `parser`.
    ///
    /// # Errors
    ///
    /// As [`Walker::optional`], with parse failures reported by `parser`.
    pub fn optional_with<T, P: EnvParser<T> + ?Sized>(
        &self,
        name: &str,
        parser: &P,
        fallback: impl FnOnce() -> Option<T>,
    ) -> EnvResult<Option<T>> {
        let field = self.descriptor(name)?;
        let path = join_path(&self.path, name);
        let resolution = populate::read_scalar(field, self.source, &self.scope, &path, parser)?;
        Ok(populate::finish_optional(resolution, &path, fallback))
    }

    /// Populates a nested struct field. The child is always walked, so its
    /// required leaves must resolve.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised inside the nested struct.
    pub fn nested<T: FromEnv>(&self, name: &str) -> EnvResult<T> {
        self.descriptor(name)?;
        let child = self.child(name, T::schema());
        trace!(field = %child.path, scope = %child.scope, "populating nested struct");
        T::populate(&child)
    }

    /// Populates an `Option<T>` field holding a nested struct.
    ///
    /// The struct is walked only when at least one of its leaf keys, at any
    /// depth, is present in the source. Otherwise the field takes
    /// `fallback()`, and required leaves inside the struct are not reported.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised inside the nested struct once it is
    /// known to be present.
    pub fn optional_nested<T: FromEnv>(
        &self,
        name: &str,
        fallback: impl FnOnce() -> Option<T>,
    ) -> EnvResult<Option<T>> {
        self.descriptor(name)?;
        let schema = T::schema();
        if any_present(&schema, self.source, &self.scope) {
            let child = self.child(name, schema);
            trace!(field = %child.path, scope = %child.scope, "populating optional nested struct");
            return T::populate(&child).map(Some);
        }
        let value = fallback();
        debug!(
            field = %join_path(&self.path, name),
            defaulted = value.is_some(),
            "no keys present for optional nested struct"
        );
        Ok(value)
    }
}
