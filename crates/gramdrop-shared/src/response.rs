//! Standardized API response envelopes.

use serde::{Deserialize, Serialize};

use crate::dto::PostResponse;

/// `{ "post": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope {
    pub post: PostResponse,
}

/// `{ "posts": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListEnvelope {
    pub posts: Vec<PostResponse>,
}

/// Error body: a human-readable message plus a machine code when one applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    // Common error constructors
    pub fn bad_request(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(error).with_code(code)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(error).with_code("not-found")
    }

    pub fn internal_error(error: impl Into<String>) -> Self {
        Self::new(error)
    }
}
