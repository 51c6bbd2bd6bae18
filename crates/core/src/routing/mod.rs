//! Client-side routing.
//!
//! - `RoutePattern`: parsed path template with at most one `:param` segment.
//! - `Route` / `resolve`: ordered route table and the matching algorithm.
//! - `NavigationEnv` / `MemoryHistory`: the environment's location + history.
//! - `Router`: owns the current path, notifies subscribers on change.
//! - `RouterContext`: explicit provider; access without a router fails fast.

mod context;
mod history;
mod pattern;
mod route;
mod router;

pub use context::*;
pub use history::*;
pub use pattern::*;
pub use route::*;
pub use router::*;

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The router was used where no router has been provided. This is a
    /// programming error in the caller.
    #[error("Router used outside of an initialized router context")]
    OutsideContext,

    /// Paths handed to `navigate` must be absolute.
    #[error("Invalid navigation path (must start with '/'): {0}")]
    InvalidPath(String),

    /// The navigation environment refused to record the entry. Returned by
    /// `NavigationEnv::push` implementations; the router stays where it was.
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),
}
