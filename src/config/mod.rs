//! Configuration module for vigil
//!
//! Provides types and parsing for `vigil.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
