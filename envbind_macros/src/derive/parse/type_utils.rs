//! Type introspection helpers.
//!
//! The check is syntactic: `Option<T>` is recognised by its final path
//! segment, so aliases of `Option` are treated as plain types.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the inner type if `ty` is `Option<T>`.
///
/// Matches `Option<T>`, `std::option::Option<T>` and similar qualified
/// forms. Only the outermost layer is inspected, so `Option<Option<T>>`
/// yields `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let last = path.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
