//! `#[derive(Context)]`: one `FromRef` impl per field.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::fields::named_fields;

pub fn derive_context_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match named_fields(&input, "Context") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    // Field types must be distinct, otherwise the impls overlap.
    let impls = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;

        Some(quote! {
            impl #impl_generics crate::FromRef<#name #ty_generics> for #field_type #where_clause {
                fn from_ref(ctx: &#name #ty_generics) -> Self {
                    ctx.#field_name.clone()
                }
            }
        })
    });

    TokenStream::from(quote! { #(#impls)* })
}
