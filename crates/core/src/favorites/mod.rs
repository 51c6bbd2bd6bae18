//! Saved favorites and their durable mirror.
//!
//! The collection is an ordered list of `FavoriteItem`s keyed by `id`, stored
//! as one JSON array in a single storage slot. It is loaded once when the
//! store is created and written back in full after every mutation.

mod model;
mod store;

pub use model::*;
pub use store::*;
