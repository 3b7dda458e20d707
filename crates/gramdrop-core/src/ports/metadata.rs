use async_trait::async_trait;

use crate::domain::{MetadataSource, PostMetadata};
use crate::error::FetchError;

/// One way of acquiring display metadata for a post URL.
///
/// Strategies are tried in order by
/// [`MetadataFetcher`](crate::services::MetadataFetcher); each reports
/// which [`MetadataSource`] it stands for.
#[async_trait]
pub trait MetadataStrategy: Send + Sync {
    /// Label recorded on metadata this strategy produced.
    fn source(&self) -> MetadataSource;

    /// Fetch metadata for an already validated post URL.
    async fn fetch(&self, url: &str) -> Result<PostMetadata, FetchError>;
}
