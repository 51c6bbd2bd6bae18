pub mod catalog;
pub mod favorites;
pub mod routes;
pub mod setup;
pub mod util;

pub use catalog::*;
pub use favorites::*;
pub use routes::*;
pub use setup::*;
pub use util::*;
