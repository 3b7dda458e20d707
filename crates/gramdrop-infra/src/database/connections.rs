use std::path::PathBuf;
#[cfg(feature = "sqlite")]
use std::time::Duration;

#[cfg(feature = "sqlite")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "sqlite")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Directory holding the database file; created on init when set.
    pub data_dir: Option<PathBuf>,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// A file-backed store at `<data_dir>/app.db`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            url: format!("sqlite://{}?mode=rwc", data_dir.join("app.db").display()),
            data_dir: Some(data_dir),
            max_connections: 5,
            min_connections: 1,
        }
    }

    /// A private in-memory store. Every pool connection would see its own
    /// database, so the pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            data_dir: None,
            max_connections: 1,
            min_connections: 1,
        }
    }
}

/// Handle on the opened post store.
///
/// Constructed explicitly by the application and passed to the repositories
/// that need it; call [`DatabaseConnections::close`] on shutdown.
#[cfg(feature = "sqlite")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(not(feature = "sqlite"))]
pub struct DatabaseConnections;

#[cfg(feature = "sqlite")]
impl DatabaseConnections {
    /// Open the database and bring its schema up to date.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing post store...");

        if let Some(dir) = &config.data_dir {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                DbErr::Custom(format!("cannot create data dir {}: {e}", dir.display()))
            })?;
        }

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        Migrator::up(&main, None).await?;

        tracing::info!(
            "Post store ready (pool: {})",
            config.max_connections
        );

        Ok(Self { main })
    }

    /// Release every pooled connection. Clones of `main` held elsewhere
    /// share the pool and are closed with it.
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing post store");
        self.main.close().await
    }
}

#[cfg(not(feature = "sqlite"))]
impl DatabaseConnections {
    pub async fn close(self) -> Result<(), std::convert::Infallible> {
        Ok(())
    }
}
