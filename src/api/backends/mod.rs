//! Backend implementations of [`ResourceFetcher`](crate::api::ResourceFetcher).
//!
//! | Backend | Module | Use |
//! |---------|--------|-----|
//! | HTTP (reqwest) | [`http`] | Live PokéAPI |
//! | In-memory | [`fixture`] | Tests and offline replay |

pub mod fixture;
pub mod http;

pub use fixture::FixtureFetcher;
pub use http::HttpFetcher;
