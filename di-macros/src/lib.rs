//! Compile-time dependency injection for dexcard.
//!
//! - `#[derive(Context)]` makes every field of the root context extractable.
//! - `#[derive(FromContext)]` builds a service by extracting each of its fields.
//!
//! Generated code refers to `crate::FromRef`, so the consuming crate must
//! define or re-export that trait at its root.

use proc_macro::TokenStream;

mod context;
mod fields;
mod from_context;

/// Derives `FromRef<Self>` for the type of every named field.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub fetcher: AppFetcher,
///     pub config: AppConfig,
/// }
///
/// // impl FromRef<Context> for AppFetcher { ... }
/// // impl FromRef<Context> for AppConfig { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Derives `FromRef<Context>` by resolving each field from the context.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct SearchService {
///     api: PokeApi,          // PokeApi::from_ref(ctx)
///     names: AppNames,       // AppNames::from_ref(ctx)
/// }
/// ```
///
/// Use `#[from_context(Context = "OtherContext")]` to resolve against a
/// different root type.
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}
