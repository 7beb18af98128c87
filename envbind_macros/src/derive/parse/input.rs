//! Input gathering for the derive macros.
//!
//! The struct or enum, its container attributes and every field or variant
//! are collected in one pass so expansion can fail fast with useful errors.

use std::collections::HashSet;

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use super::{
    ContainerAttrs, FieldAttrs, FieldMapping, option_inner, parse_container_attrs,
    parse_field_attrs, parse_variant_rename,
};

/// A struct accepted by `#[derive(FromEnv)]`.
pub(crate) struct StructInput {
    pub attrs: ContainerAttrs,
    pub fields: Vec<FieldSpec>,
}

/// One named field with its resolved attributes.
pub(crate) struct FieldSpec {
    pub ident: Ident,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

impl FieldSpec {
    /// Field name as it appears in schemas and error paths.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Inner type when the field is declared as `Option<T>`.
    pub(crate) fn optional_inner(&self) -> Option<&Type> {
        option_inner(&self.ty)
    }
}

/// A unit-only enum accepted by `#[derive(EnvValue)]`.
pub(crate) struct EnumInput {
    pub attrs: ContainerAttrs,
    pub variants: Vec<VariantSpec>,
}

/// One enum variant and the text that selects it.
pub(crate) struct VariantSpec {
    pub ident: Ident,
    pub name: String,
}

/// Gathers and validates the fields of a `FromEnv` struct.
///
/// `rename_all` is applied here: a scalar field without an explicit key gets
/// the renamed field name as its key.
pub(crate) fn parse_struct_input(input: &DeriveInput) -> syn::Result<StructInput> {
    let attrs = parse_container_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "FromEnv requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FromEnv can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "FromEnv requires named fields"));
        };
        let mut field_attrs = parse_field_attrs(field)?;
        if field_attrs.nested && field_attrs.default.is_some() && option_inner(&field.ty).is_none()
        {
            return Err(syn::Error::new_spanned(
                field,
                "a nested field that is not an Option always populates its struct and cannot declare a default",
            ));
        }
        if let Some(rule) = attrs.rename_all.filter(|_| !field_attrs.nested) {
            let renamed = LitStr::new(&rule.apply(&ident.unraw().to_string()), ident.span());
            field_attrs.mapping = match field_attrs.mapping {
                FieldMapping::Unspecified => FieldMapping::Literal(renamed),
                FieldMapping::Keyed { key: None, parser } => FieldMapping::Keyed {
                    key: Some(renamed),
                    parser,
                },
                explicit => explicit,
            };
        }
        fields.push(FieldSpec {
            ident,
            ty: field.ty.clone(),
            attrs: field_attrs,
        });
    }
    Ok(StructInput { attrs, fields })
}

/// Gathers the variants of an `EnvValue` enum.
pub(crate) fn parse_enum_input(input: &DeriveInput) -> syn::Result<EnumInput> {
    let attrs = parse_container_attrs(&input.attrs)?;
    if let Some(prefix) = &attrs.prefix {
        return Err(syn::Error::new_spanned(
            prefix,
            "`prefix` applies to FromEnv structs, not EnvValue enums",
        ));
    }
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "EnvValue can only be derived for enums",
        ));
    };

    let mut seen = HashSet::new();
    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "EnvValue requires unit variants",
            ));
        }
        let rename = parse_variant_rename(&variant.attrs)?;
        let name = match (rename, attrs.rename_all) {
            (Some(rename), _) => rename.value(),
            (None, Some(rule)) => rule.apply(&variant.ident.unraw().to_string()),
            (None, None) => variant.ident.unraw().to_string(),
        };
        if !seen.insert(name.clone()) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate variant name '{name}'"),
            ));
        }
        variants.push(VariantSpec {
            ident: variant.ident.clone(),
            name,
        });
    }
    Ok(EnumInput { attrs, variants })
}
