//! Implementation of the `Fakeable` derive macro.

use crate::crate_paths::get_fakegen_core_crate;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Field, Fields, GenericParam, LitStr, Visibility};

/// Field metadata collected from the struct definition.
struct FieldInfo<'a> {
    field: &'a Field,
    name: String,
    tag: String,
    settable: bool,
}

impl<'a> FieldInfo<'a> {
    fn parse(field: &'a Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        let mut tags = Vec::new();
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("faker")) {
            let lit: LitStr = attr.parse_args()?;
            tags.push(lit.value());
        }

        Ok(Self {
            field,
            name: ident.unraw().to_string(),
            tag: tags.join(","),
            settable: !matches!(field.vis, Visibility::Inherited),
        })
    }
}

pub fn derive_fakeable_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let core = get_fakegen_core_crate()?;
    expand(input, &core)
}

/// Expand the derive with `core` as the path to the fakegen_core crate.
fn expand(mut input: DeriveInput, core: &TokenStream) -> syn::Result<TokenStream> {
    let struct_name = input.ident.clone();
    let struct_name_str = struct_name.unraw().to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .map(FieldInfo::parse)
                .collect::<syn::Result<Vec<_>>>()?,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Fakeable can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Fakeable can only be derived for structs",
            ));
        }
    };

    // Every type parameter must itself be fakeable
    for param in input.generics.params.iter_mut() {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(#core::Fakeable));
        }
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let descriptors = fields.iter().map(|info| {
        let name = &info.name;
        let ty = &info.field.ty;
        let tag = &info.tag;
        let settable = info.settable;
        quote! {
            #core::FieldType {
                name: #name,
                ty: <#ty as #core::Fakeable>::fake_type(),
                tag: #tag,
                settable: #settable,
            }
        }
    });

    let projections = fields.iter().map(|info| {
        let name = &info.name;
        let ident = &info.field.ident;
        quote! {
            (
                ::std::string::String::from(#name),
                #core::Fakeable::to_fake(&self.#ident),
            )
        }
    });

    let rebuilds = fields.iter().map(|info| {
        let name = &info.name;
        let ident = &info.field.ident;
        let ty = &info.field.ty;
        quote! {
            #ident: <#ty as #core::Fakeable>::from_fake(
                record.take(#struct_name_str, #name)?,
            )?
        }
    });

    Ok(quote! {
        impl #impl_generics #core::Fakeable for #struct_name #ty_generics #where_clause {
            fn fake_type() -> #core::FakeType {
                #core::FakeType::Record(#core::RecordType::new(
                    #struct_name_str,
                    ::std::vec![#(#descriptors),*],
                ))
            }

            fn to_fake(&self) -> #core::FakeValue {
                #core::FakeValue::Record(#core::FakeRecord::new(
                    ::std::vec![#(#projections),*],
                ))
            }

            #[allow(unused_mut)]
            fn from_fake(
                value: #core::FakeValue,
            ) -> ::std::result::Result<Self, #core::ConvertError> {
                let mut record = match value {
                    #core::FakeValue::Record(record) => record,
                    other => {
                        return ::std::result::Result::Err(
                            #core::ConvertError::mismatch(#struct_name_str, &other),
                        );
                    }
                };
                ::std::result::Result::Ok(Self {
                    #(#rebuilds,)*
                })
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_with_core(input: DeriveInput) -> syn::Result<TokenStream> {
        expand(input, &quote!(::fakegen_core))
    }

    #[test]
    fn test_derive_collects_tags_and_visibility() {
        let input: DeriveInput = parse_quote! {
            struct User {
                #[faker("email")]
                pub email: String,
                #[faker("boundary_start=18, boundary_end=65")]
                pub age: i32,
                secret: String,
            }
        };

        let output = expand_with_core(input).unwrap().to_string();

        assert!(output.contains("impl :: fakegen_core :: Fakeable for User"));
        assert!(output.contains("\"email\""));
        assert!(output.contains("\"boundary_start=18, boundary_end=65\""));
        assert!(output.contains("settable : true"));
        assert!(output.contains("settable : false"));
    }

    #[test]
    fn test_derive_joins_repeated_attributes() {
        let input: DeriveInput = parse_quote! {
            struct Account {
                #[faker("name")]
                #[faker("keep")]
                pub owner: String,
            }
        };

        let output = expand_with_core(input).unwrap().to_string();
        assert!(output.contains("\"name,keep\""));
    }

    #[test]
    fn test_derive_strips_raw_identifiers() {
        let input: DeriveInput = parse_quote! {
            struct Token {
                pub r#type: String,
            }
        };

        let output = expand_with_core(input).unwrap().to_string();
        assert!(output.contains("name : \"type\""));
    }

    #[test]
    fn test_derive_bounds_type_parameters() {
        let input: DeriveInput = parse_quote! {
            struct Page<T> {
                pub items: Vec<T>,
            }
        };

        let output = expand_with_core(input).unwrap().to_string();
        assert!(output.contains("T : :: fakegen_core :: Fakeable"));
    }

    #[test]
    fn test_derive_uses_resolved_core_path() {
        let input: DeriveInput = parse_quote! {
            struct User {
                pub name: String,
            }
        };

        let output = expand(input, &quote!(::fakegen::__core)).unwrap().to_string();
        assert!(output.contains("impl :: fakegen :: __core :: Fakeable for User"));
        assert!(!output.contains("fakegen_core"));
    }

    #[test]
    fn test_derive_rejects_tuple_structs_and_enums() {
        let tuple: DeriveInput = parse_quote! {
            struct Pair(pub i32, pub i32);
        };
        assert!(expand_with_core(tuple).is_err());

        let enumeration: DeriveInput = parse_quote! {
            enum Color { Red, Green }
        };
        assert!(expand_with_core(enumeration).is_err());
    }
}
