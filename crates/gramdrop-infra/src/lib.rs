//! # Gramdrop Infrastructure
//!
//! Concrete implementations of the ports defined in `gramdrop-core`.
//! This crate contains the post store and the HTTP metadata strategies.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database, in-memory post store only
//! - `sqlite` - SQLite post store via SeaORM, schema managed by `migration`
//! - `mock` - SeaORM `MockDatabase` tests (implies `sqlite`)

pub mod database;
pub mod metadata;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, DatabaseConnections, InMemoryPostRepository};

// Re-exports - HTTP
pub use metadata::{MetadataConfig, OEmbedStrategy, OpenGraphStrategy, build_fetcher};

// Re-exports - SQLite
#[cfg(feature = "sqlite")]
pub use database::SqlitePostRepository;
