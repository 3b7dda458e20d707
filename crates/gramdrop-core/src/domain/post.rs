use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PostMetadata;

/// Delivery state of the resource a post promises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    #[serde(rename = "not requested")]
    NotRequested,
    #[serde(rename = "requested")]
    Requested,
    #[serde(rename = "received")]
    Received,
}

impl PostStatus {
    /// Status a freshly ingested post starts in.
    pub fn initial(has_keyword: bool) -> Self {
        if has_keyword {
            Self::Requested
        } else {
            Self::NotRequested
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotRequested => "not requested",
            Self::Requested => "requested",
            Self::Received => "received",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status label that is not one of the known states.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown post status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PostStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "not requested" => Ok(Self::NotRequested),
            "requested" => Ok(Self::Requested),
            "received" => Ok(Self::Received),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Post entity - a saved Instagram post and what was learned about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub instagram_url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub creator_name: Option<String>,
    pub tags: Vec<String>,
    pub keyword: Option<String>,
    pub status: PostStatus,
    pub resource_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from acquired metadata and caption analysis.
    ///
    /// The initial status is `requested` when a comment keyword was found,
    /// `not requested` otherwise.
    pub fn new(
        instagram_url: impl Into<String>,
        metadata: PostMetadata,
        tags: Vec<String>,
        keyword: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instagram_url: instagram_url.into(),
            thumbnail_url: metadata.thumbnail_url,
            caption: metadata.caption,
            creator_name: metadata.creator_name,
            tags,
            status: PostStatus::initial(keyword.is_some()),
            keyword,
            resource_link: None,
            created_at: Utc::now(),
        }
    }
}

/// Partial update of the operator-controlled fields of a post.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub resource_link: Option<String>,
    pub status: Option<PostStatus>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.resource_link.is_none() && self.status.is_none()
    }

    /// Fill in the implied status: delivering a link without saying otherwise
    /// marks the resource as received.
    pub fn resolved(self) -> Self {
        let status = match (self.status, &self.resource_link) {
            (Some(status), _) => Some(status),
            (None, Some(_)) => Some(PostStatus::Received),
            (None, None) => None,
        };
        Self { status, ..self }
    }
}
