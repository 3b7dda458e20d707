use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use gramdrop_core::domain::{MetadataSource, PostMetadata};
use gramdrop_core::error::FetchError;
use gramdrop_core::ports::MetadataStrategy;

use super::{non_empty, transport_error};

static HTML_TAG: Lazy<Option<Regex>> = Lazy::new(|| match Regex::new(r"<[^>]+>") {
    Ok(re) => Some(re),
    Err(e) => {
        tracing::error!(error = %e, "Invalid html tag pattern, embed markup ignored");
        None
    }
});

/// The subset of an oEmbed response we read.
#[derive(Debug, Deserialize)]
struct OEmbedPayload {
    thumbnail_url: Option<String>,
    title: Option<String>,
    html: Option<String>,
    author_name: Option<String>,
}

/// Primary strategy: the platform's oEmbed endpoint.
pub struct OEmbedStrategy {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl OEmbedStrategy {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

fn strip_html(markup: &str) -> Option<String> {
    let text = HTML_TAG.as_ref()?.replace_all(markup, "");
    non_empty(Some(text.trim().to_string()))
}

#[async_trait]
impl MetadataStrategy for OEmbedStrategy {
    fn source(&self) -> MetadataSource {
        MetadataSource::Oembed
    }

    async fn fetch(&self, url: &str) -> Result<PostMetadata, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url), ("omitscript", "true")])
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                stage: "oEmbed",
                status: status.as_u16(),
            });
        }

        let payload: OEmbedPayload = response.json().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Malformed(e.to_string())
            }
        })?;

        let caption = non_empty(payload.title)
            .or_else(|| payload.html.as_deref().and_then(strip_html));

        Ok(PostMetadata {
            thumbnail_url: non_empty(payload.thumbnail_url),
            caption,
            creator_name: non_empty(payload.author_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const POST_URL: &str = "https://www.instagram.com/p/abc12345/";

    fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent(crate::metadata::DEFAULT_USER_AGENT)
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap()
    }

    async fn strategy_for(server: &MockServer) -> OEmbedStrategy {
        OEmbedStrategy::new(
            client(),
            format!("{}/oembed/", server.uri()),
            Duration::from_millis(500),
        )
    }

    #[test]
    fn test_strip_html() {
        assert!(HTML_TAG.is_some());
        assert_eq!(strip_html("<p> a <i>b</i> </p>").as_deref(), Some("a b"));
        assert_eq!(strip_html("<br/><hr>"), None);
    }

    #[tokio::test]
    async fn test_reads_oembed_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oembed/"))
            .and(query_param("url", POST_URL))
            .and(query_param("omitscript", "true"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "thumbnail_url": "https://cdn.example/t.jpg",
                "title": "Step by step guide. Comment GUIDE",
                "author_name": "study.with.lena",
                "html": "<blockquote>ignored</blockquote>"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let metadata = strategy_for(&server).await.fetch(POST_URL).await.unwrap();

        assert_eq!(metadata.thumbnail_url.as_deref(), Some("https://cdn.example/t.jpg"));
        assert_eq!(
            metadata.caption.as_deref(),
            Some("Step by step guide. Comment GUIDE")
        );
        assert_eq!(metadata.creator_name.as_deref(), Some("study.with.lena"));
    }

    #[tokio::test]
    async fn test_caption_falls_back_to_stripped_html() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oembed/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "",
                "html": "<blockquote><p>Free <b>template</b> inside</p></blockquote>"
            })))
            .mount(&server)
            .await;

        let metadata = strategy_for(&server).await.fetch(POST_URL).await.unwrap();

        assert_eq!(metadata.caption.as_deref(), Some("Free template inside"));
        assert_eq!(metadata.thumbnail_url, None);
        assert_eq!(metadata.creator_name, None);
    }

    #[tokio::test]
    async fn test_non_success_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = strategy_for(&server).await.fetch(POST_URL).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let err = strategy_for(&server).await.fetch(POST_URL).await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"title": "late"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = strategy_for(&server).await.fetch(POST_URL).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
    }
}
