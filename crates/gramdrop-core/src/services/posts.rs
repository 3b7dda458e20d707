use std::sync::Arc;

use uuid::Uuid;

use crate::analysis::{classify_tags, extract_keyword};
use crate::domain::{MetadataSource, Post, PostUpdate};
use crate::error::DomainError;
use crate::ports::PostRepository;
use crate::validation::validate_instagram_url;

use super::MetadataFetcher;

/// A freshly stored post together with the strategy that described it.
#[derive(Debug, Clone)]
pub struct IngestedPost {
    pub post: Post,
    pub source: MetadataSource,
}

/// Ingestion pipeline and post lifecycle operations.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    fetcher: MetadataFetcher,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, fetcher: MetadataFetcher) -> Self {
        Self { repo, fetcher }
    }

    /// Validate, fetch, analyze and persist a post link.
    ///
    /// Nothing is fetched for a rejected link and nothing is stored unless
    /// metadata acquisition succeeded.
    pub async fn ingest(&self, raw_url: &str) -> Result<IngestedPost, DomainError> {
        let url = validate_instagram_url(raw_url)?;
        let instagram_url = raw_url.trim();
        tracing::debug!(%url, "Link accepted, fetching metadata");

        let fetched = self.fetcher.fetch(url.as_str()).await?;

        let caption = fetched.metadata.caption.as_deref().unwrap_or_default();
        let tags = classify_tags(caption)
            .into_iter()
            .map(String::from)
            .collect();
        let keyword = extract_keyword(caption);

        let post = Post::new(instagram_url, fetched.metadata, tags, keyword);
        let post = self.repo.insert(post).await?;

        tracing::info!(
            post_id = %post.id,
            source = %fetched.source,
            status = %post.status,
            tags = ?post.tags,
            "Post ingested"
        );

        Ok(IngestedPost {
            post,
            source: fetched.source,
        })
    }

    /// Apply an operator update and return the post as stored afterwards.
    pub async fn update(&self, id: Uuid, update: PostUpdate) -> Result<Post, DomainError> {
        if update.is_empty() {
            return Err(DomainError::NoFields);
        }

        let update = update.resolved();
        let touched = self.repo.update_fields(id, update).await?;
        tracing::debug!(post_id = %id, touched, "Post update applied");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list_recent().await?)
    }
}
