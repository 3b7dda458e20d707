//! Post store - database connection management and repositories.

mod connections;
mod memory;

#[cfg(feature = "sqlite")]
mod sqlite_base;
#[cfg(feature = "sqlite")]
pub mod sqlite_repo;

#[cfg(feature = "sqlite")]
pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use memory::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
pub use sqlite_repo::SqlitePostRepository;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod tests;
