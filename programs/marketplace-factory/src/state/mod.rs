//! Program account definitions

pub mod registry;
pub mod user_listing;

pub use registry::*;
pub use user_listing::*;
