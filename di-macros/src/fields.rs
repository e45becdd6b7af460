//! Shared field extraction for the derive macros.

use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Field, Fields};

/// Returns the named fields of a struct, or a compile error naming `derive`.
pub fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> Result<&'a Punctuated<Field, Comma>, syn::Error> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{derive} can only be derived for structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{derive} can only be derived for structs"),
        )),
    }
}
