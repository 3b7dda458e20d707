//! In-memory post store - used when no database is available.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use gramdrop_core::domain::{Post, PostUpdate};
use gramdrop_core::error::RepoError;
use gramdrop_core::ports::{BaseRepository, PostRepository};

/// In-memory post repository using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn update_fields(&self, id: Uuid, update: PostUpdate) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.get_mut(&id) else {
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
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
