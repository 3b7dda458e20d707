use std::sync::Arc;

use crate::domain::FetchedMetadata;
use crate::error::FetchError;
use crate::ports::MetadataStrategy;

/// Ordered chain of metadata strategies.
///
/// Strategies run in insertion order; the first success is returned tagged
/// with its source. When every strategy fails, the last error is returned.
#[derive(Clone, Default)]
pub struct MetadataFetcher {
    strategies: Vec<Arc<dyn MetadataStrategy>>,
}

impl MetadataFetcher {
    /// Append a strategy to the end of the chain.
    pub fn with_strategy(mut self, strategy: Arc<dyn MetadataStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchedMetadata, FetchError> {
        let mut last_error = FetchError::NoStrategies;

        for strategy in &self.strategies {
            let source = strategy.source();
            match strategy.fetch(url).await {
                Ok(metadata) => {
                    tracing::debug!(%source, "Metadata acquired");
                    return Ok(FetchedMetadata { metadata, source });
                }
                Err(e) => {
                    tracing::warn!(%source, error = %e, "Metadata strategy failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
