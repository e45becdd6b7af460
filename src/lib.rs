//! dexcard - localized Pokédex cards from PokéAPI
//!
//! Resolves a Korean name, English name or dex number into one merged card:
//! species info, an evolution tree with conditions, defensive type matchups,
//! learnable moves and encounter locations.

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod locale;
pub mod models;
pub mod names;
pub mod render;
pub mod services;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
