use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostUpdate};
use crate::error::RepoError;

/// Generic repository trait defining the storage operations shared by entities.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Write only the fields set in `update`; others keep their stored value.
    ///
    /// Returns the number of rows touched. A missing id is not an error here.
    async fn update_fields(&self, id: Uuid, update: PostUpdate) -> Result<u64, RepoError>;

    /// All posts, newest first.
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError>;
}
