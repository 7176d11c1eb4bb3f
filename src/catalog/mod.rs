//! Trick catalog data model.

pub mod registry;
pub mod trick;

pub use registry::TrickCatalog;
pub use trick::{Stance, TrickProfile};
