//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use gramdrop_infra::database::DatabaseConfig;
use gramdrop_infra::metadata::{DEFAULT_OEMBED_ENDPOINT, DEFAULT_USER_AGENT, MetadataConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub metadata: MetadataConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        // An explicit DATABASE_URL owns its location; DATA_DIR only applies
        // to the default file.
        let mut database = match env::var("DATABASE_URL") {
            Ok(url) => DatabaseConfig {
                url,
                data_dir: None,
                ..DatabaseConfig::in_dir(&data_dir)
            },
            Err(_) => DatabaseConfig::in_dir(&data_dir),
        };
        database.max_connections = parse_env("DB_MAX_CONNECTIONS", database.max_connections);
        database.min_connections = parse_env("DB_MIN_CONNECTIONS", database.min_connections);

        let metadata = MetadataConfig {
            oembed_endpoint: env::var("OEMBED_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_OEMBED_ENDPOINT.to_string()),
            user_agent: env::var("METADATA_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            timeout: Duration::from_secs(parse_env("METADATA_TIMEOUT_SECS", 10)),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_env("PORT", 8080),
            database,
            metadata,
        }
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is unset or unparseable.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
