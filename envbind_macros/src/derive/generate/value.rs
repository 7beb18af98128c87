//! `EnvValue` bodies for unit-only enums.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;
use syn::ext::IdentExt;

use crate::derive::parse::EnumInput;

/// Emits `type_tag` and `parse_env`, matching variant names exactly.
pub(crate) fn value_body(krate: &TokenStream, ident: &Ident, parsed: &EnumInput) -> TokenStream {
    let type_name = ident.unraw().to_string();
    let names: Vec<&str> = parsed
        .variants
        .iter()
        .map(|variant| variant.name.as_str())
        .collect();
    let arms = parsed.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let name = &variant.name;
        quote! { #name => ::core::result::Result::Ok(Self::#variant_ident) }
    });
    quote! {
        fn type_tag() -> #krate::TypeTag {
            #krate::TypeTag::Enum {
                name: #type_name,
                variants: &[#(#names),*],
            }
        }

        fn parse_env(raw: &str) -> ::core::result::Result<Self, #krate::ParseError> {
            match raw {
                #(#arms,)*
                _ => ::core::result::Result::Err(#krate::ParseError::InvalidEnumValue {
                    expected: &[#(#names),*],
                }),
            }
        }
    }
}
