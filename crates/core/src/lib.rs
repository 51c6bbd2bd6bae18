//! moviehub-core
//!
//! Core library for MovieHub, a movie discovery application.
//!
//! This crate owns the two stateful pieces of the application (the client-side
//! router and the persisted favorites store) together with the storage
//! backends, the remote catalog client, and search helpers they lean on.
//!
//! Everything substantive lives here so it is fully testable and reusable
//! from multiple frontends (CLI, a web shell, etc.).

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod observe;
pub mod routing;
pub mod search;
pub mod storage;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
