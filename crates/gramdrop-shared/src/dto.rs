//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to save a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Partial update of a post. Blank strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub resource_link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdatePostRequest {
    /// Trimmed, non-blank resource link.
    pub fn resource_link(&self) -> Option<&str> {
        non_blank(self.resource_link.as_deref())
    }

    /// Trimmed, non-blank status label.
    pub fn status(&self) -> Option<&str> {
        non_blank(self.status.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Query string of the validation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateQuery {
    #[serde(default)]
    pub url: String,
}

/// Result of validating a link, for the submit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// `"success"` or `"error"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
    pub message: String,
}

/// A post as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub instagram_url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub creator_name: Option<String>,
    pub tags: Vec<String>,
    pub keyword: Option<String>,
    pub status: String,
    pub resource_link: Option<String>,
    pub created_at: String,
    /// Metadata strategy that produced this post; only set on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
