//! Compute module - Combat resolution, outcome matrices and team search.

mod combat;
mod features;
mod matrix;

pub mod search;

pub use combat::*;
pub use features::*;
pub use matrix::*;
