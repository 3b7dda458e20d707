//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod metadata;
mod repository;

pub use metadata::MetadataStrategy;
pub use repository::{BaseRepository, PostRepository};
