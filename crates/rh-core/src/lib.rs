//! rh-core: shared media types, sort mapping, errors, and configuration.
//!
//! This crate is the foundational dependency for the other rh-* crates. It
//! carries no I/O beyond reading a configuration file.

pub mod config;
pub mod error;
pub mod media;
pub mod sort;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use media::*;
pub use sort::{map_sort, SortDirection, SortField, SortSpec};
