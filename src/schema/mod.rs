//! Schema module - Candidate entities, roster ingestion and search configuration.

mod config;
mod pokemon;
mod roster;
mod selector;

pub use config::*;
pub use pokemon::*;
pub use roster::*;
pub use selector::*;
