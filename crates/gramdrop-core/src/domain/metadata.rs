use std::fmt;

use serde::{Deserialize, Serialize};

/// Display metadata for a post, as far as it could be acquired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub creator_name: Option<String>,
}

/// Which acquisition strategy produced a piece of metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataSource {
    Oembed,
    Fallback,
}

impl MetadataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oembed => "oembed",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MetadataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata tagged with the strategy that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedMetadata {
    pub metadata: PostMetadata,
    pub source: MetadataSource,
}
