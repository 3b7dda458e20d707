use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use gramdrop_core::domain::{MetadataSource, PostMetadata};
use gramdrop_core::error::FetchError;
use gramdrop_core::ports::MetadataStrategy;

use super::{non_empty, transport_error};

const THUMBNAIL_KEYS: &[&str] = &["og:image", "twitter:image"];
const CAPTION_KEYS: &[&str] = &["og:title", "og:description", "description"];
const CREATOR_KEYS: &[&str] = &["author", "og:site_name"];

/// Matchers for one meta key, in both attribute orders.
struct MetaPattern {
    key: &'static str,
    name_first: Regex,
    content_first: Regex,
}

impl MetaPattern {
    fn compile(key: &'static str) -> Option<Self> {
        let k = regex::escape(key);
        let name_first = Regex::new(&format!(
            r#"(?i)<meta[^>]+(?:property|name)=["']{k}["'][^>]+content=["']([^"']+)["'][^>]*>"#
        ))
        .ok()?;
        let content_first = Regex::new(&format!(
            r#"(?i)<meta[^>]+content=["']([^"']+)["'][^>]+(?:property|name)=["']{k}["'][^>]*>"#
        ))
        .ok()?;
        Some(Self {
            key,
            name_first,
            content_first,
        })
    }

    fn find(&self, html: &str) -> Option<String> {
        self.name_first
            .captures(html)
            .or_else(|| self.content_first.captures(html))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

static META_PATTERNS: Lazy<Vec<MetaPattern>> = Lazy::new(|| {
    THUMBNAIL_KEYS
        .iter()
        .chain(CAPTION_KEYS)
        .chain(CREATOR_KEYS)
        .copied()
        .filter_map(MetaPattern::compile)
        .collect()
});

fn meta_content(html: &str, key: &str) -> Option<String> {
    META_PATTERNS
        .iter()
        .find(|p| p.key == key)
        .and_then(|p| non_empty(p.find(html)))
}

fn first_meta(html: &str, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| meta_content(html, key))
}

/// Pull thumbnail, caption and creator out of a page's meta tags.
///
/// For each field the first key present wins.
pub fn extract_page_metadata(html: &str) -> PostMetadata {
    PostMetadata {
        thumbnail_url: first_meta(html, THUMBNAIL_KEYS),
        caption: first_meta(html, CAPTION_KEYS),
        creator_name: first_meta(html, CREATOR_KEYS),
    }
}

/// Fallback strategy: scrape the post page itself.
pub struct OpenGraphStrategy {
    client: reqwest::Client,
    timeout: Duration,
}

impl OpenGraphStrategy {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl MetadataStrategy for OpenGraphStrategy {
    fn source(&self) -> MetadataSource {
        MetadataSource::Fallback
    }

    async fn fetch(&self, url: &str) -> Result<PostMetadata, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                stage: "page",
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        Ok(extract_page_metadata(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE: &str = r#"<!DOCTYPE html>
<html><head>
<meta name="description" content="12 likes - resume tips">
<meta property="og:title" content="Resume template, type CV to get it">
<meta content="https://cdn.example/og.jpg" property="og:image" />
<meta name="twitter:image" content="https://cdn.example/tw.jpg">
<meta property="og:site_name" content="Instagram">
</head><body></body></html>"#;

    #[test]
    fn test_extracts_first_present_keys() {
        let metadata = extract_page_metadata(PAGE);

        assert_eq!(metadata.thumbnail_url.as_deref(), Some("https://cdn.example/og.jpg"));
        assert_eq!(
            metadata.caption.as_deref(),
            Some("Resume template, type CV to get it")
        );
        assert_eq!(metadata.creator_name.as_deref(), Some("Instagram"));
    }

    #[test]
    fn test_lower_priority_keys_fill_gaps() {
        let html = r#"<meta name="twitter:image" content="https://cdn.example/tw.jpg">
<meta name="description" content="study notes">
<meta name="author" content="notes.by.sam">
<meta property="og:site_name" content="Instagram">"#;

        let metadata = extract_page_metadata(html);

        assert_eq!(metadata.thumbnail_url.as_deref(), Some("https://cdn.example/tw.jpg"));
        assert_eq!(metadata.caption.as_deref(), Some("study notes"));
        assert_eq!(metadata.creator_name.as_deref(), Some("notes.by.sam"));
    }

    #[test]
    fn test_description_key_is_exact() {
        let html = r#"<meta property="og:description" content="from og">"#;
        assert_eq!(meta_content(html, "description"), None);
        assert_eq!(meta_content(html, "og:description").as_deref(), Some("from og"));
    }

    #[test]
    fn test_page_without_meta() {
        assert_eq!(
            extract_page_metadata("<html><head><title>x</title></head></html>"),
            PostMetadata::default()
        );
    }

    #[tokio::test]
    async fn test_fetches_page_with_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/p/abc12345/"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let client = reqwest::Client::builder()
            .user_agent(crate::metadata::DEFAULT_USER_AGENT)
            .build()
            .unwrap();
        let strategy = OpenGraphStrategy::new(client, Duration::from_secs(2));

        let metadata = strategy
            .fetch(&format!("{}/p/abc12345/", server.uri()))
            .await
            .unwrap();

        assert_eq!(metadata.creator_name.as_deref(), Some("Instagram"));
    }

    #[tokio::test]
    async fn test_non_success_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let strategy = OpenGraphStrategy::new(reqwest::Client::new(), Duration::from_secs(2));
        let err = strategy.fetch(&server.uri()).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { stage: "page", status: 429 }));
    }
}
