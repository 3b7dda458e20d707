//! Application state - shared across all handlers.

use std::sync::Arc;

use gramdrop_core::ports::PostRepository;
use gramdrop_core::services::PostService;
use gramdrop_infra::database::{DatabaseConnections, InMemoryPostRepository};
use gramdrop_infra::metadata::build_fetcher;

#[cfg(feature = "sqlite")]
use gramdrop_infra::database::SqlitePostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    /// Which post store backs `posts`, for the health endpoint.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// The returned connections, when a database was opened, belong to the
    /// caller and should be closed on shutdown.
    pub async fn new(config: &AppConfig) -> anyhow::Result<(Self, Option<DatabaseConnections>)> {
        let fetcher = build_fetcher(&config.metadata)?;

        // Initialize the post store, falling back to memory if it cannot be opened
        #[cfg(feature = "sqlite")]
        let (db, repo, storage): (
            Option<DatabaseConnections>,
            Arc<dyn PostRepository>,
            &'static str,
        ) = match DatabaseConnections::init(&config.database).await {
            Ok(connections) => {
                let repo: Arc<dyn PostRepository> =
                    Arc::new(SqlitePostRepository::new(connections.main.clone()));
                (Some(connections), repo, "sqlite")
            }
            Err(e) => {
                tracing::error!(
                    "Failed to open post store: {}. Using in-memory fallback.",
                    e
                );
                (None, Arc::new(InMemoryPostRepository::new()), "memory")
            }
        };

        #[cfg(not(feature = "sqlite"))]
        let (db, repo, storage): (
            Option<DatabaseConnections>,
            Arc<dyn PostRepository>,
            &'static str,
        ) = {
            tracing::info!(
                ignored_url = %config.database.url,
                "Running without sqlite feature - using in-memory repository"
            );
            (None, Arc::new(InMemoryPostRepository::new()), "memory")
        };

        tracing::info!(storage, "Application state initialized");

        Ok((Self::from_parts(PostService::new(repo, fetcher), storage), db))
    }

    pub fn from_parts(posts: PostService, storage: &'static str) -> Self {
        Self { posts, storage }
    }
}
