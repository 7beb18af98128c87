//! Token generation for both derives.
//!
//! Generation cannot fail: everything that can be rejected has already been
//! rejected while parsing.

mod populate;
mod schema;
mod value;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use super::crate_path;
use super::parse::{EnumInput, StructInput};

/// Generate the `FromEnv` implementation for a struct.
pub(crate) fn from_env_impl(input: &DeriveInput, parsed: &StructInput) -> TokenStream {
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let schema = schema::schema_body(&krate, ident, parsed);
    let populate = populate::populate_body(&krate, parsed);
    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::FromEnv for #ident #ty_generics #where_clause {
            fn schema() -> #krate::Schema {
                #schema
            }

            fn populate<__S: #krate::EnvSource + ?::core::marker::Sized>(
                __walker: &#krate::Walker<'_, __S>,
            ) -> #krate::EnvResult<Self> {
                #populate
            }
        }
    }
}

/// Generate the `EnvValue` implementation for a unit-only enum.
pub(crate) fn env_value_impl(input: &DeriveInput, parsed: &EnumInput) -> TokenStream {
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let body = value::value_body(&krate, ident, parsed);
    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::EnvValue for #ident #ty_generics #where_clause {
            #body
        }
    }
}
