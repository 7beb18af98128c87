//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[envbind(crate = "...")]` attribute value into the
//! tokens that prefix every runtime path in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed container attribute.
///
/// Defaults to `::envbind` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::envbind }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: envbind")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("deps::envbind"), "deps :: envbind")]
    fn resolve_produces_expected_tokens(
        #[case] input: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = input
            .map(syn::parse_str::<syn::Path>)
            .transpose()
            .map_err(|err| anyhow!("invalid path: {err}"))?;
        let tokens = resolve(parsed.as_ref()).to_string();
        ensure!(tokens == expected, "expected {expected}, got {tokens}");
        Ok(())
    }
}
