//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use gramdrop_core::domain::PostStatus;

const TAG_DELIMITER: char = ',';

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub instagram_url: String,
    pub thumbnail_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub creator_name: Option<String>,
    pub tags: String,
    pub keyword: Option<String>,
    pub status: Status,
    pub resource_link: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Stored form of [`PostStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "not requested")]
    NotRequested,
    #[sea_orm(string_value = "requested")]
    Requested,
    #[sea_orm(string_value = "received")]
    Received,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<PostStatus> for Status {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::NotRequested => Self::NotRequested,
            PostStatus::Requested => Self::Requested,
            PostStatus::Received => Self::Received,
        }
    }
}

impl From<Status> for PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::NotRequested => Self::NotRequested,
            Status::Requested => Self::Requested,
            Status::Received => Self::Received,
        }
    }
}

pub(crate) fn join_tags(tags: &[String]) -> String {
    tags.join(&TAG_DELIMITER.to_string())
}

pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for gramdrop_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            instagram_url: model.instagram_url,
            thumbnail_url: model.thumbnail_url,
            caption: model.caption,
            creator_name: model.creator_name,
            tags: split_tags(&model.tags),
            keyword: model.keyword,
            status: model.status.into(),
            resource_link: model.resource_link,
            created_at: model.created_at,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<gramdrop_core::domain::Post> for ActiveModel {
    fn from(post: gramdrop_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            instagram_url: Set(post.instagram_url),
            thumbnail_url: Set(post.thumbnail_url),
            caption: Set(post.caption),
            creator_name: Set(post.creator_name),
            tags: Set(join_tags(&post.tags)),
            keyword: Set(post.keyword),
            status: Set(post.status.into()),
            resource_link: Set(post.resource_link),
            created_at: Set(post.created_at),
        }
    }
}
