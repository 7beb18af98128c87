//! Expansion pipeline shared by both derives: parse, then generate.

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expands `#[derive(FromEnv)]`.
pub(crate) fn from_env(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_struct_input(input)?;
    Ok(generate::from_env_impl(input, &parsed))
}

/// Expands `#[derive(EnvValue)]`.
pub(crate) fn env_value(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_enum_input(input)?;
    Ok(generate::env_value_impl(input, &parsed))
}
