//! Procedural macros for fakegen.
//!
//! This crate provides the `#[derive(Fakeable)]` macro, the compile-time
//! field enumerator the generation engine relies on to walk structs.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod crate_paths;
mod fakeable_derive;

/// Derives a `Fakeable` implementation for a struct.
///
/// Only structs with named fields are supported. The generated code reaches
/// the trait through `fakegen::__core` when the `fakegen` facade is a
/// dependency, and through `fakegen_core` otherwise.
///
/// # Attributes
///
/// - `#[faker("tag")]` - Raw tag text for the field. A provider name
///   (`"email"`), an inline parameter (`"len=10"`,
///   `"boundary_start=18, boundary_end=65"`), the skip marker (`"-"`), or any
///   of these followed by `,keep` to preserve a non-zero current value.
///
/// Fields declared `pub` are written by the generator; private fields are
/// carried over unchanged.
///
/// `keep` compares the current value against the zero value of the field's
/// type. A field the caller deliberately set to `0`, `false` or `""` cannot
/// be told apart from an unset one and is generated again through its other
/// tags; with `keep` as its only tag, generation fails. Wrap the field in
/// `Option` when zero is meaningful: `Some(0)` is kept.
///
/// # Example
///
/// ```ignore
/// use fakegen::Fakeable;
///
/// #[derive(Fakeable)]
/// pub struct User {
///     #[faker("email")]
///     pub email: String,
///
///     #[faker("boundary_start=18, boundary_end=65")]
///     pub age: i32,
///
///     #[faker("-")]
///     pub internal_id: u64,
/// }
/// ```
#[proc_macro_derive(Fakeable, attributes(faker))]
pub fn derive_fakeable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fakeable_derive::derive_fakeable_impl(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
