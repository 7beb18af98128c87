//! `FromEnv::schema` bodies.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Ident, Type};

use crate::derive::parse::{DefaultValue, FieldMapping, FieldSpec, ParserSpec, StructInput};

/// Emits the `Schema` expression: one descriptor per field, in declaration
/// order, followed by the struct prefix.
pub(crate) fn schema_body(krate: &TokenStream, ident: &Ident, parsed: &StructInput) -> TokenStream {
    let name = ident.unraw().to_string();
    let fields = parsed.fields.iter().map(|field| descriptor(krate, field));
    let prefix = parsed
        .attrs
        .prefix
        .as_ref()
        .map(|prefix| quote! { .with_prefix(#prefix) });
    quote! {
        #krate::Schema::new(#name, ::std::vec![#(#fields),*]) #prefix
    }
}

fn descriptor(krate: &TokenStream, field: &FieldSpec) -> TokenStream {
    let name = field.name();
    let tag = type_tag(krate, field);
    let mapping = mapping(krate, &field.attrs.mapping);
    let default = field.attrs.default.as_ref().map(|default| {
        let text = default_text(default);
        quote! { .with_default(#text) }
    });
    quote! {
        #krate::FieldDescriptor::new(#name, #tag) #mapping #default
    }
}

/// Type tag for a field. Scalars without a custom parser go through
/// `EnvValue::type_tag`, which is where unsupported types are rejected.
fn type_tag(krate: &TokenStream, field: &FieldSpec) -> TokenStream {
    let (ty, optional) = field
        .optional_inner()
        .map_or((&field.ty, false), |inner| (inner, true));
    let base = if field.attrs.nested {
        quote_spanned! {ty.span()=>
            #krate::TypeTag::Nested(<#ty as #krate::FromEnv>::schema())
        }
    } else if let Some(ParserSpec::Custom(_)) = field.attrs.mapping.parser() {
        let text = type_text(ty);
        quote! { #krate::TypeTag::Custom(#text) }
    } else {
        quote_spanned! {ty.span()=>
            <#ty as #krate::EnvValue>::type_tag()
        }
    };
    if optional {
        quote! { #krate::TypeTag::optional(#base) }
    } else {
        base
    }
}

fn mapping(krate: &TokenStream, mapping: &FieldMapping) -> Option<TokenStream> {
    let value = match mapping {
        FieldMapping::Unspecified => return None,
        FieldMapping::Literal(key) => quote! { #krate::Mapping::Literal(#key) },
        FieldMapping::Skipped => quote! { #krate::Mapping::Skipped },
        FieldMapping::Keyed { key, parser } => {
            let key = key.as_ref().map_or_else(
                || quote! { ::core::option::Option::None },
                |key| quote! { ::core::option::Option::Some(#key) },
            );
            let parser = parser.as_ref().map_or_else(
                || quote! { ::core::option::Option::None },
                |parser| {
                    let text = expr_text(parser.expr());
                    let constructor = match parser {
                        ParserSpec::Custom(_) => quote! { custom },
                        ParserSpec::Validator(_) => quote! { validator },
                    };
                    quote! {
                        ::core::option::Option::Some(#krate::ParserRef::#constructor(#text))
                    }
                },
            );
            quote! { #krate::Mapping::Keyed { key: #key, parser: #parser } }
        }
    };
    Some(quote! { .with_mapping(#value) })
}

fn default_text(default: &DefaultValue) -> String {
    match default {
        DefaultValue::Trait => String::from("Default::default()"),
        DefaultValue::Expr(expr) => expr_text(expr),
    }
}

fn expr_text(expr: &syn::Expr) -> String {
    quote! { #expr }.to_string()
}

/// Compact rendering of a type, e.g. `Vec<String>`.
pub(crate) fn type_text(ty: &Type) -> String {
    quote! { #ty }
        .to_string()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}
