//! Admissibility check for public Instagram post links.
//!
//! Rules run in a fixed order and the first failure wins:
//! empty input, unparseable URL, foreign host, missing slug, unsupported
//! content kind, short slug, and finally explicit private flags in the query.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

const ALLOWED_HOSTS: &[&str] = &["instagram.com", "instagr.am"];
const ALLOWED_KINDS: &[&str] = &["p", "reel", "tv"];
const MIN_SLUG_LEN: usize = 5;

/// Outcome code of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationCode {
    Ok,
    Empty,
    InvalidUrl,
    InvalidHost,
    MissingSlug,
    PrivateOrUnsupported,
    ShortSlug,
    PrivateFlag,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Empty => "empty",
            Self::InvalidUrl => "invalid-url",
            Self::InvalidHost => "invalid-host",
            Self::MissingSlug => "missing-slug",
            Self::PrivateOrUnsupported => "private-or-unsupported",
            Self::ShortSlug => "short-slug",
            Self::PrivateFlag => "private-flag",
        }
    }

    /// User-facing explanation for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Ok => "Looks good. Next step: fetch metadata and store the post.",
            Self::Empty => "Paste a public Instagram post link to continue.",
            Self::InvalidUrl => "Enter a full URL starting with http(s).",
            Self::InvalidHost => "Use an instagram.com link (post, reel, or TV).",
            Self::MissingSlug => "Use a post permalink such as /p/<id> or /reel/<id>.",
            Self::PrivateOrUnsupported => {
                "This looks like profile or gated content. Use a public post, reel, or IGTV link."
            }
            Self::ShortSlug => "The post ID looks incomplete; double-check the link.",
            Self::PrivateFlag => {
                "This post appears private or requires login. Make it public before adding."
            }
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .code.message())]
pub struct ValidationError {
    pub code: ValidationCode,
}

impl From<ValidationCode> for ValidationError {
    fn from(code: ValidationCode) -> Self {
        Self { code }
    }
}

/// Hosts accepted after stripping a leading `www.`.
pub fn allowed_hosts() -> &'static [&'static str] {
    ALLOWED_HOSTS
}

/// First path segments accepted as public content kinds.
pub fn allowed_kinds() -> &'static [&'static str] {
    ALLOWED_KINDS
}

/// Validate a raw link and return the parsed URL when it is admissible.
pub fn validate_instagram_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationCode::Empty.into());
    }

    let url = Url::parse(trimmed).map_err(|_| ValidationCode::InvalidUrl)?;

    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    if !allowed_hosts().contains(&host) {
        return Err(ValidationCode::InvalidHost.into());
    }

    let parts: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
    let [kind, slug, ..] = parts.as_slice() else {
        return Err(ValidationCode::MissingSlug.into());
    };

    if !allowed_kinds().contains(kind) {
        return Err(ValidationCode::PrivateOrUnsupported.into());
    }

    if slug.chars().count() < MIN_SLUG_LEN {
        return Err(ValidationCode::ShortSlug.into());
    }

    if query_flag(&url, "private", "true") || query_flag(&url, "is_private", "1") {
        return Err(ValidationCode::PrivateFlag.into());
    }

    Ok(url)
}

// Only the first occurrence of a parameter is consulted.
fn query_flag(url: &Url, key: &str, expected: &str) -> bool {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .is_some_and(|(_, v)| v == expected)
}
