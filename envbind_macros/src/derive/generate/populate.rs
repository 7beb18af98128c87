//! `FromEnv::populate` bodies.
//!
//! The body is a single struct literal. Field initialisers run in declaration
//! order and each one asks the walker for exactly one field, so the first
//! failing field is the one reported.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::parse::{DefaultValue, FieldSpec, ParserSpec, StructInput};

pub(crate) fn populate_body(krate: &TokenStream, parsed: &StructInput) -> TokenStream {
    let inits = parsed.fields.iter().map(|field| field_init(krate, field));
    quote! {
        ::core::result::Result::Ok(Self {
            #(#inits,)*
        })
    }
}

fn field_init(krate: &TokenStream, field: &FieldSpec) -> TokenStream {
    let ident = &field.ident;
    let name = field.name();
    let optional = field.optional_inner();
    let fallback = fallback(field.attrs.default.as_ref(), optional.is_some());
    let parser = field.attrs.mapping.parser().map(|parser| parser_tokens(krate, parser));
    let value = match (field.attrs.nested, optional, parser) {
        (true, None, _) => {
            let ty = &field.ty;
            quote! { __walker.nested::<#ty>(#name) }
        }
        (true, Some(inner), _) => {
            quote! { __walker.optional_nested::<#inner>(#name, #fallback) }
        }
        (false, None, Some(parser)) => {
            quote! { __walker.required_with(#name, &#parser, #fallback) }
        }
        (false, None, None) => {
            let ty = &field.ty;
            quote! { __walker.required::<#ty>(#name, #fallback) }
        }
        (false, Some(_), Some(parser)) => {
            quote! { __walker.optional_with(#name, &#parser, #fallback) }
        }
        (false, Some(inner), None) => {
            quote! { __walker.optional::<#inner>(#name, #fallback) }
        }
    };
    quote! { #ident: #value? }
}

fn parser_tokens(krate: &TokenStream, parser: &ParserSpec) -> TokenStream {
    match parser {
        ParserSpec::Custom(expr) => quote! { (#expr) },
        ParserSpec::Validator(expr) => quote! { #krate::make_validator(#expr) },
    }
}

/// Closure producing the field's value when nothing is read.
///
/// For required fields it wraps the default in `Some`; for `Option` fields
/// the default already has the field's type.
fn fallback(default: Option<&DefaultValue>, optional: bool) -> TokenStream {
    match (default, optional) {
        (None, _) => quote! { || ::core::option::Option::None },
        (Some(DefaultValue::Trait), false) => {
            quote! { || ::core::option::Option::Some(::core::default::Default::default()) }
        }
        (Some(DefaultValue::Expr(expr)), false) => {
            quote! { || ::core::option::Option::Some(#expr) }
        }
        (Some(DefaultValue::Trait), true) => quote! { || ::core::default::Default::default() },
        (Some(DefaultValue::Expr(expr)), true) => quote! { || #expr },
    }
}
