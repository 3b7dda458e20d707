//! SQLite repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use gramdrop_core::domain::{Post, PostUpdate};
use gramdrop_core::error::RepoError;
use gramdrop_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::sqlite_base::{SeaOrmBaseRepository, query_error};

/// SQLite post repository.
pub type SqlitePostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn update_fields(&self, id: Uuid, update: PostUpdate) -> Result<u64, RepoError> {
        if update.is_empty() {
            return Ok(0);
        }

        let mut query = PostEntity::update_many().filter(post::Column::Id.eq(id));
        if let Some(link) = update.resource_link {
            query = query.col_expr(post::Column::ResourceLink, Expr::value(link));
        }
        if let Some(status) = update.status {
            query = query.col_expr(post::Column::Status, Expr::value(status.as_str()));
        }

        let result = query.exec(&self.db).await.map_err(query_error)?;
        tracing::debug!(post_id = %id, rows = result.rows_affected, "Updated post fields");

        Ok(result.rows_affected)
    }

    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
