//! Post handlers - ingest, list, read and operator updates.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use gramdrop_core::DomainError;
use gramdrop_core::domain::{MetadataSource, Post, PostStatus, PostUpdate};
use gramdrop_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use gramdrop_shared::{PostEnvelope, PostListEnvelope};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: Post, source: Option<MetadataSource>) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        instagram_url: post.instagram_url,
        thumbnail_url: post.thumbnail_url,
        caption: post.caption,
        creator_name: post.creator_name,
        tags: post.tags,
        keyword: post.keyword,
        status: post.status.as_str().to_string(),
        resource_link: post.resource_link,
        created_at: post.created_at.to_rfc3339(),
        source: source.map(|s| s.as_str().to_string()),
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request("Invalid post id", "invalid-id"))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(HttpResponse::Ok().json(PostListEnvelope {
        posts: posts.into_iter().map(|p| post_response(p, None)).collect(),
    }))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let url = req.url.unwrap_or_default();

    let ingested = state.posts.ingest(&url).await?;

    Ok(HttpResponse::Created().json(PostEnvelope {
        post: post_response(ingested.post, Some(ingested.source)),
    }))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(PostEnvelope {
        post: post_response(post, None),
    }))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let status = body
        .status()
        .map(str::parse::<PostStatus>)
        .transpose()
        .map_err(DomainError::from)?;
    let update = PostUpdate {
        resource_link: body.resource_link().map(String::from),
        status,
    };

    let post = state.posts.update(id, update).await?;

    Ok(HttpResponse::Ok().json(PostEnvelope {
        post: post_response(post, None),
    }))
}
