//! HTTP metadata strategies - oEmbed first, Open Graph scrape second.

mod oembed;
mod open_graph;

use std::sync::Arc;
use std::time::Duration;

use gramdrop_core::error::FetchError;
use gramdrop_core::services::MetadataFetcher;

pub use oembed::OEmbedStrategy;
pub use open_graph::{OpenGraphStrategy, extract_page_metadata};

pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.instagram.com/oembed/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration shared by the HTTP strategies.
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    pub oembed_endpoint: String,
    pub user_agent: String,
    /// Upper bound for each attempt, connect through body.
    pub timeout: Duration,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            oembed_endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Build the standard two-step chain: oEmbed, then the page's meta tags.
pub fn build_fetcher(config: &MetadataConfig) -> Result<MetadataFetcher, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    tracing::debug!(
        endpoint = %config.oembed_endpoint,
        timeout_ms = config.timeout.as_millis() as u64,
        "Metadata strategies configured"
    );

    Ok(MetadataFetcher::default()
        .with_strategy(Arc::new(OEmbedStrategy::new(
            client.clone(),
            config.oembed_endpoint.clone(),
            config.timeout,
        )))
        .with_strategy(Arc::new(OpenGraphStrategy::new(client, config.timeout))))
}

pub(crate) fn transport_error(e: reqwest::Error, timeout: Duration) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Transport(e.to_string())
    }
}

/// Treat blank strings the same as missing values.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
