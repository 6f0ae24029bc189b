//! Credentials and settings, and the resolution of endpoints from them.

mod loader;
mod model;
mod resolver;
mod shared;

pub use model::*;
pub use shared::SharedConfiguration;
