use chrono::Duration;
use uuid::Uuid;

use gramdrop_core::domain::{Post, PostMetadata, PostStatus, PostUpdate};
use gramdrop_core::error::RepoError;
use gramdrop_core::ports::{BaseRepository, PostRepository};

use crate::database::{DatabaseConfig, DatabaseConnections, SqlitePostRepository};

async fn open_repo() -> SqlitePostRepository {
    let db = DatabaseConnections::init(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    SqlitePostRepository::new(db.main)
}

async fn read_back(repo: &SqlitePostRepository, id: Uuid) -> Option<Post> {
    repo.find_by_id(id).await.unwrap()
}

fn sample_post() -> Post {
    Post::new(
        "https://www.instagram.com/p/abc12345/",
        PostMetadata {
            thumbnail_url: Some("https://cdn.example/t.jpg".into()),
            caption: Some("Figma tutorial, comment UI for the kit".into()),
            creator_name: Some("designer".into()),
        },
        vec!["tutorial".into(), "design".into()],
        Some("ui".into()),
    )
}

#[cfg(feature = "mock")]
#[tokio::test]
async fn test_find_post_by_id_from_mock() {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::database::entity::post::{self, Status};

    let post_id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            instagram_url: "https://instagram.com/p/abcde".to_owned(),
            thumbnail_url: None,
            caption: Some("study notes".to_owned()),
            creator_name: None,
            tags: "study".to_owned(),
            keyword: None,
            status: Status::NotRequested,
            resource_link: None,
            created_at: now,
        }]])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.tags, vec!["study".to_string()]);
    assert_eq!(post.status, PostStatus::NotRequested);
}

#[tokio::test]
async fn test_insert_then_read_back() {
    let repo = open_repo().await;
    let post = sample_post();

    repo.insert(post.clone()).await.unwrap();
    let found = read_back(&repo, post.id).await.unwrap();

    assert_eq!(found.instagram_url, post.instagram_url);
    assert_eq!(found.tags, post.tags);
    assert_eq!(found.keyword.as_deref(), Some("ui"));
    assert_eq!(found.status, PostStatus::Requested);
    assert_eq!(found.resource_link, None);
}

#[tokio::test]
async fn test_close_releases_store() {
    let db = DatabaseConnections::init(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    db.close().await.unwrap();
}

#[tokio::test]
async fn test_missing_post_is_none() {
    let repo = open_repo().await;
    assert!(read_back(&repo, Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn test_duplicate_id_is_constraint_violation() {
    let repo = open_repo().await;
    let post = sample_post();

    repo.insert(post.clone()).await.unwrap();
    let err = repo.insert(post).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_update_coalesces_missing_fields() {
    let repo = open_repo().await;
    let post = sample_post();
    repo.insert(post.clone()).await.unwrap();

    let rows = repo
        .update_fields(
            post.id,
            PostUpdate {
                resource_link: Some("https://drive.example/kit".into()),
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let found = read_back(&repo, post.id).await.unwrap();
    assert_eq!(found.resource_link.as_deref(), Some("https://drive.example/kit"));
    assert_eq!(found.status, PostStatus::Requested);
    assert_eq!(found.caption, post.caption);

    repo.update_fields(
        post.id,
        PostUpdate {
            resource_link: None,
            status: Some(PostStatus::Received),
        },
    )
    .await
    .unwrap();

    let found = read_back(&repo, post.id).await.unwrap();
    assert_eq!(found.status, PostStatus::Received);
    assert_eq!(found.resource_link.as_deref(), Some("https://drive.example/kit"));
}

#[tokio::test]
async fn test_update_unknown_id_touches_nothing() {
    let repo = open_repo().await;
    let rows = repo
        .update_fields(
            Uuid::new_v4(),
            PostUpdate {
                resource_link: None,
                status: Some(PostStatus::Received),
            },
        )
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let repo = open_repo().await;

    let mut oldest = sample_post();
    oldest.created_at -= Duration::hours(2);
    let mut middle = sample_post();
    middle.created_at -= Duration::hours(1);
    let newest = sample_post();

    for post in [middle.clone(), newest.clone(), oldest.clone()] {
        repo.insert(post).await.unwrap();
    }

    let ids: Vec<Uuid> = repo
        .list_recent()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
}
