//! Dependency injection infrastructure.
//!
//! Services are assembled at compile time from the [`Context`](crate::context::Context)
//! using the `FromRef` trait and the derive macros from `di-macros`.
//!
//! - `FromRef<T>`: extract a value from a reference to `T`
//! - `#[derive(Context)]`: makes each field of the context extractable
//! - `#[derive(FromContext)]`: builds a service by extracting each of its fields
//!
//! # Example
//!
//! ```ignore
//! #[derive(FromContext, Clone)]
//! pub struct EvolutionService {
//!     api: PokeApi,       // itself FromContext
//!     labels: AppLabels,  // a Context field
//! }
//!
//! let service = EvolutionService::from_ref(&ctx);
//! ```

/// Extracts a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

pub use di_macros::{Context, FromContext};
