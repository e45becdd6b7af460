//! `#[derive(FromContext)]`: build a service by resolving every field.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::fields::named_fields;

pub fn derive_from_context_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let context_type = match context_type(&input) {
        Ok(ty) => ty,
        Err(err) => return err.to_compile_error().into(),
    };

    let fields = match named_fields(&input, "FromContext") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let field_inits = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;

        Some(quote! {
            #field_name: <#field_type as crate::FromRef<#context_type>>::from_ref(ctx)
        })
    });

    TokenStream::from(quote! {
        impl #impl_generics crate::FromRef<#context_type> for #name #ty_generics #where_clause {
            fn from_ref(ctx: &#context_type) -> Self {
                Self {
                    #(#field_inits),*
                }
            }
        }
    })
}

/// Reads `#[from_context(Context = "Path")]`, defaulting to `Context`.
/// Unknown keys and unparsable paths are reported at the attribute.
fn context_type(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let mut context_ty: Option<syn::Type> = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("from_context")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("Context") {
                let value: syn::LitStr = meta.value()?.parse()?;
                context_ty = Some(value.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `Context = \"Type\"`"))
            }
        })?;
    }

    Ok(match context_ty {
        Some(ty) => quote! { #ty },
        None => quote! { Context },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_context_type_defaults_to_context() {
        let input: DeriveInput = parse_quote! {
            struct Service { api: PokeApi }
        };
        assert_eq!(context_type(&input).unwrap().to_string(), "Context");
    }

    #[test]
    fn test_context_type_reads_override() {
        let input: DeriveInput = parse_quote! {
            #[from_context(Context = "crate::context::Context")]
            struct Service { api: PokeApi }
        };
        let ty = context_type(&input).unwrap().to_string().replace(' ', "");
        assert_eq!(ty, "crate::context::Context");
    }

    #[test]
    fn test_context_type_rejects_unknown_key() {
        let input: DeriveInput = parse_quote! {
            #[from_context(Ctx = "Other")]
            struct Service { api: PokeApi }
        };
        let err = context_type(&input).unwrap_err();
        assert!(err.to_string().contains("expected `Context"));
    }

    #[test]
    fn test_context_type_rejects_bad_path() {
        let input: DeriveInput = parse_quote! {
            #[from_context(Context = "not a type!")]
            struct Service { api: PokeApi }
        };
        assert!(context_type(&input).is_err());
    }
}
