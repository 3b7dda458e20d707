//! Test doubles for the ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{MetadataSource, Post, PostMetadata, PostUpdate};
use crate::error::{FetchError, RepoError};
use crate::ports::{BaseRepository, MetadataStrategy, PostRepository};

pub struct StubStrategy {
    source: MetadataSource,
    result: Result<PostMetadata, u16>,
    calls: AtomicUsize,
}

impl StubStrategy {
    pub fn ok(source: MetadataSource, caption: &str) -> Arc<Self> {
        Self::with_metadata(
            source,
            PostMetadata {
                thumbnail_url: Some("https://cdn.example/thumb.jpg".into()),
                caption: Some(caption.into()),
                creator_name: Some("creator".into()),
            },
        )
    }

    pub fn with_metadata(source: MetadataSource, metadata: PostMetadata) -> Arc<Self> {
        Arc::new(Self {
            source,
            result: Ok(metadata),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(source: MetadataSource, status: u16) -> Arc<Self> {
        Arc::new(Self {
            source,
            result: Err(status),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataStrategy for StubStrategy {
    fn source(&self) -> MetadataSource {
        self.source
    }

    async fn fetch(&self, _url: &str) -> Result<PostMetadata, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(|status| FetchError::Status {
            stage: self.source.as_str(),
            status,
        })
    }
}

#[derive(Default)]
pub struct RecordingRepository {
    posts: Mutex<HashMap<Uuid, Post>>,
    writes: AtomicUsize,
}

impl RecordingRepository {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn seed(&self, post: Post) {
        self.posts.lock().unwrap().insert(post.id, post);
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for RecordingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.posts.lock().unwrap().insert(post.id, post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for RecordingRepository {
    async fn update_fields(&self, id: Uuid, update: PostUpdate) -> Result<u64, RepoError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(link) = update.resource_link {
            post.resource_link = Some(link);
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        Ok(1)
    }

    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.posts.lock().unwrap().values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
