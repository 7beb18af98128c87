//! Attribute parsing for the derive macros.
//!
//! Every `#[envbind(...)]` attribute is read once, validated eagerly and
//! reduced to the plain data the generators need. Unknown keys and
//! contradictory combinations are compile errors.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, LitStr, Token};

mod input;
mod literals;
mod rename;
mod type_utils;

pub(crate) use input::{EnumInput, FieldSpec, StructInput, parse_enum_input, parse_struct_input};
use literals::{ensure_unset, lit_str};
pub(crate) use rename::RenameRule;
pub(crate) use type_utils::option_inner;

/// Container-level attributes shared by structs and enums.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub prefix: Option<LitStr>,
    pub rename_all: Option<RenameRule>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[envbind(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `::envbind::`.
    pub crate_path: Option<syn::Path>,
}

/// How a field maps onto an environment key.
#[derive(Clone)]
pub(crate) enum FieldMapping {
    Unspecified,
    Literal(LitStr),
    Skipped,
    Keyed {
        key: Option<LitStr>,
        parser: Option<ParserSpec>,
    },
}

impl FieldMapping {
    pub(crate) const fn parser(&self) -> Option<&ParserSpec> {
        match self {
            Self::Keyed {
                parser: Some(parser),
                ..
            } => Some(parser),
            _ => None,
        }
    }
}

/// Parser declared on a field.
#[derive(Clone)]
pub(crate) enum ParserSpec {
    /// `parser = expr`: replaces the built-in parser.
    Custom(Expr),
    /// `validate = expr`: built-in parser followed by a check.
    Validator(Expr),
}

impl ParserSpec {
    pub(crate) const fn expr(&self) -> &Expr {
        match self {
            Self::Custom(expr) | Self::Validator(expr) => expr,
        }
    }
}

/// Declared fallback for a field.
#[derive(Clone)]
pub(crate) enum DefaultValue {
    /// Bare `default`: `Default::default()`.
    Trait,
    /// `default = expr`.
    Expr(Expr),
}

/// Field-level attributes recognised by `#[derive(FromEnv)]`.
///
/// - a bare string literal or `key` selects the environment key (`"-"` skips).
/// - `skip` never consults the environment.
/// - `parser`/`validate` attach a custom parser or a post-parse check.
/// - `default` supplies the fallback value.
/// - `nested` populates the field as a struct from its own leaf keys.
#[derive(Clone)]
pub(crate) struct FieldAttrs {
    pub mapping: FieldMapping,
    pub default: Option<DefaultValue>,
    pub nested: bool,
}

/// Iterate all `#[envbind(...)]` attributes.
fn envbind_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("envbind"))
}

fn unknown(meta: &ParseNestedMeta) -> syn::Error {
    let name = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!("unknown envbind attribute `{name}`"))
}

fn parse_crate_path(meta: &ParseNestedMeta) -> syn::Result<syn::Path> {
    let value = lit_str(meta, "crate")?;
    syn::parse_str(&value.value()).map_err(|err| syn::Error::new(value.span(), err))
}

/// Extracts container-level `#[envbind(...)]` metadata.
pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in envbind_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident().map(ToString::to_string).as_deref() {
                Some("prefix") => {
                    ensure_unset(out.prefix.as_ref(), &meta, "prefix")?;
                    out.prefix = Some(lit_str(&meta, "prefix")?);
                }
                Some("rename_all") => {
                    ensure_unset(out.rename_all.as_ref(), &meta, "rename_all")?;
                    out.rename_all = Some(RenameRule::parse(&lit_str(&meta, "rename_all")?)?);
                }
                Some("crate") => {
                    ensure_unset(out.crate_path.as_ref(), &meta, "crate")?;
                    out.crate_path = Some(parse_crate_path(&meta)?);
                }
                _ => return Err(unknown(&meta)),
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Field attributes as written, before combinations are checked.
#[derive(Default)]
struct RawFieldAttrs {
    literal: Option<LitStr>,
    key: Option<LitStr>,
    parser: Option<Expr>,
    validate: Option<Expr>,
    skip: bool,
    default: Option<DefaultValue>,
    nested: bool,
}

impl RawFieldAttrs {
    fn apply(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("key") => {
                ensure_unset(self.key.as_ref(), meta, "key")?;
                self.key = Some(lit_str(meta, "key")?);
            }
            Some("parser") => {
                ensure_unset(self.parser.as_ref(), meta, "parser")?;
                self.parser = Some(meta.value()?.parse()?);
            }
            Some("validate") => {
                ensure_unset(self.validate.as_ref(), meta, "validate")?;
                self.validate = Some(meta.value()?.parse()?);
            }
            Some("default") => {
                ensure_unset(self.default.as_ref(), meta, "default")?;
                self.default = Some(if meta.input.peek(Token![=]) {
                    DefaultValue::Expr(meta.value()?.parse()?)
                } else {
                    DefaultValue::Trait
                });
            }
            Some("skip") => self.skip = true,
            Some("nested") => self.nested = true,
            _ => return Err(unknown(meta)),
        }
        Ok(())
    }

    fn has_key_override(&self) -> bool {
        self.key.is_some() || self.parser.is_some() || self.validate.is_some()
    }

    fn into_attrs(self, field: &syn::Field) -> syn::Result<FieldAttrs> {
        let conflict = |message: &str| -> syn::Result<FieldAttrs> {
            Err(syn::Error::new_spanned(field, message))
        };
        if self.parser.is_some() && self.validate.is_some() {
            return conflict("`parser` and `validate` cannot be combined");
        }
        if self.literal.is_some() && (self.has_key_override() || self.skip) {
            return conflict(
                "a bare key string must be the only mapping; use `key = \"...\"` alongside `parser` or `validate`",
            );
        }
        if self.skip && self.has_key_override() {
            return conflict("`skip` cannot be combined with `key`, `parser` or `validate`");
        }
        if self.nested && (self.literal.is_some() || self.skip || self.has_key_override()) {
            return conflict(
                "nested fields take their keys from their own fields; remove the key, parser or skip",
            );
        }

        let parser = self
            .parser
            .map(ParserSpec::Custom)
            .or_else(|| self.validate.map(ParserSpec::Validator));
        let mapping = match (self.literal, self.key, parser) {
            (Some(literal), _, _) => FieldMapping::Literal(literal),
            (None, None, None) if self.skip => FieldMapping::Skipped,
            (None, None, None) => FieldMapping::Unspecified,
            (None, key, parser) => FieldMapping::Keyed { key, parser },
        };
        Ok(FieldAttrs {
            mapping,
            default: self.default,
            nested: self.nested,
        })
    }
}

/// Parses field-level `#[envbind(...)]` attributes.
///
/// `#[envbind("KEY")]` is the literal-key form and must stand alone in its
/// attribute; every other form is a list of keys.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut raw = RawFieldAttrs::default();
    for attr in envbind_attrs(&field.attrs) {
        if let Ok(literal) = attr.parse_args::<LitStr>() {
            if raw.literal.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate key string"));
            }
            raw.literal = Some(literal);
            continue;
        }
        attr.parse_nested_meta(|meta| raw.apply(&meta))?;
    }
    raw.into_attrs(field)
}

/// Parses `#[envbind(rename = "...")]` on an enum variant.
pub(crate) fn parse_variant_rename(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename = None;
    for attr in envbind_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("rename") {
                return Err(unknown(&meta));
            }
            ensure_unset(rename.as_ref(), &meta, "rename")?;
            rename = Some(lit_str(&meta, "rename")?);
            Ok(())
        })?;
    }
    Ok(rename)
}
