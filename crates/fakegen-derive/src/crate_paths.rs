//! Resolution of the path generated code uses to reach `fakegen_core`.
//!
//! Users normally depend on the `fakegen` facade only, which re-exports the
//! core crate as `fakegen::__core`. Crates depending on `fakegen-core`
//! directly get `::fakegen_core`.

use proc_macro2::{Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;

/// Resolves the path to the fakegen_core crate for the crate being compiled.
pub(crate) fn get_fakegen_core_crate() -> syn::Result<TokenStream> {
    resolve_core_path(|name| crate_name(name).ok())
}

/// Strategy:
///
/// 1. `fakegen` is the crate itself or a dependency: `::fakegen::__core`
/// 2. `fakegen-core` is the crate itself or a dependency: `::fakegen_core`
/// 3. Neither: compile error naming both
pub(crate) fn resolve_core_path<F>(lookup: F) -> syn::Result<TokenStream>
where
    F: Fn(&str) -> Option<FoundCrate>,
{
    match lookup("fakegen") {
        Some(FoundCrate::Itself) => return Ok(quote!(::fakegen::__core)),
        Some(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name, Span::call_site());
            return Ok(quote!(::#ident::__core));
        }
        None => {}
    }

    match lookup("fakegen-core") {
        Some(FoundCrate::Itself) => Ok(quote!(::fakegen_core)),
        Some(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name, Span::call_site());
            Ok(quote!(::#ident))
        }
        None => Err(syn::Error::new(
            Span::call_site(),
            "failed to resolve `fakegen` or `fakegen-core`. Ensure one of them is listed in Cargo.toml dependencies.",
        )),
    }
}
