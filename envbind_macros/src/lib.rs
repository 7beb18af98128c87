//! Procedural macros for `envbind`.
//!
//! `#[derive(FromEnv)]` turns a struct with named fields into a schema
//! description plus a populate body that reads each field through
//! `envbind::Walker`. `#[derive(EnvValue)]` gives a unit-only enum the
//! built-in parser that matches variant names exactly.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `envbind::FromEnv`.
///
/// Struct attributes: `prefix = "..."`, `rename_all = "..."` and
/// `crate = "..."`. Field attributes: a bare key string (`"-"` skips),
/// `skip`, `key = "..."`, `parser = path`, `validate = path`, `default`,
/// `default = expr` and `nested`.
#[proc_macro_derive(FromEnv, attributes(envbind))]
pub fn derive_from_env(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::from_env(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `envbind::EnvValue` on unit-only enums.
///
/// Variant names can be changed with `#[envbind(rename = "...")]` on a
/// variant or `#[envbind(rename_all = "...")]` on the enum.
#[proc_macro_derive(EnvValue, attributes(envbind))]
pub fn derive_env_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::env_value(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
