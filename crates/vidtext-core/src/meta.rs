use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Result, VidtextError},
    types::VideoMeta,
};

const OEMBED_URL: &str = "https://www.youtube.com/oembed";

static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"v=([A-Za-z0-9_-]{11})",
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"youtube\.com/embed/([A-Za-z0-9_-]{11})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

/// Extract the 11 character video id from a YouTube URL
pub fn video_id(url: &str) -> Result<String> {
    let url = url.trim();
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| VidtextError::InvalidUrl {
            url: url.to_string(),
        })
}

#[derive(Debug, Deserialize)]
struct OEmbed {
    title: String,
    author_name: String,
    #[serde(default)]
    thumbnail_url: Option<String>,
}

impl From<OEmbed> for VideoMeta {
    fn from(embed: OEmbed) -> Self {
        VideoMeta {
            title: embed.title,
            author: embed.author_name,
            thumbnail_url: embed.thumbnail_url,
            ..VideoMeta::default()
        }
    }
}

/// Fetch title, channel and thumbnail for a video via YouTube's oEmbed endpoint
pub async fn fetch_video_meta(url: &str) -> Result<VideoMeta> {
    fetch_video_meta_from(OEMBED_URL, url).await
}

/// Same as [`fetch_video_meta`] against a custom oEmbed endpoint.
pub async fn fetch_video_meta_from(endpoint: &str, url: &str) -> Result<VideoMeta> {
    let response = reqwest::Client::new()
        .get(endpoint)
        .query(&[("url", url.trim()), ("format", "json")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(VidtextError::MetadataFailed {
            url: url.to_string(),
            reason: format!("oEmbed returned {}", status),
        });
    }

    let body = response.text().await?;
    let embed: OEmbed = serde_json::from_str(&body)?;
    debug!(title = %embed.title, author = %embed.author_name, "fetched video metadata");

    Ok(embed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_watch_urls() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            video_id("  https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ&t=42s ").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn parses_short_and_embed_urls() {
        assert_eq!(video_id("https://youtu.be/abc_DEF-123").unwrap(), "abc_DEF-123");
        assert_eq!(
            video_id("https://www.youtube.com/embed/abc_DEF-123?autoplay=1").unwrap(),
            "abc_DEF-123"
        );
    }

    #[test]
    fn rejects_urls_without_id() {
        assert!(matches!(
            video_id("https://vimeo.com/12345"),
            Err(VidtextError::InvalidUrl { .. })
        ));
        assert!(video_id("https://youtu.be/short").is_err());
        assert!(video_id("").is_err());
    }

    #[test]
    fn oembed_maps_to_meta() {
        let json = r#"{
            "title": "Rust in 100 Seconds",
            "author_name": "Fireship",
            "thumbnail_url": "https://i.ytimg.com/vi/5C_HPTJg5ek/hqdefault.jpg",
            "type": "video"
        }"#;
        let meta: VideoMeta = serde_json::from_str::<OEmbed>(json).unwrap().into();
        assert_eq!(meta.title, "Rust in 100 Seconds");
        assert_eq!(meta.author, "Fireship");
        assert!(meta.thumbnail_url.is_some());
        assert_eq!(meta.length_s, None);
    }

    // ── oEmbed (mock server) ─────────────────────────────────────────

    const WATCH_URL: &str = "https://www.youtube.com/watch?v=5C_HPTJg5ek";

    #[tokio::test]
    async fn fetch_maps_oembed_response() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/oembed"))
            .and(wiremock::matchers::query_param("url", WATCH_URL))
            .and(wiremock::matchers::query_param("format", "json"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "title": "Rust in 100 Seconds",
                    "author_name": "Fireship",
                    "thumbnail_url": "https://i.ytimg.com/vi/5C_HPTJg5ek/hqdefault.jpg",
                    "type": "video"
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}/oembed", server.uri());
        let meta = fetch_video_meta_from(&endpoint, &format!("  {WATCH_URL} "))
            .await
            .unwrap();

        assert_eq!(meta.title, "Rust in 100 Seconds");
        assert_eq!(meta.author, "Fireship");
        assert_eq!(
            meta.thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/5C_HPTJg5ek/hqdefault.jpg")
        );
        assert_eq!(meta.views, None);
    }

    #[tokio::test]
    async fn fetch_reports_non_success_status() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/oembed"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let endpoint = format!("{}/oembed", server.uri());
        let err = fetch_video_meta_from(&endpoint, WATCH_URL).await.unwrap_err();

        match err {
            VidtextError::MetadataFailed { url, reason } => {
                assert_eq!(url, WATCH_URL);
                assert!(reason.contains("404"), "unexpected reason: {reason}");
            }
            other => panic!("expected MetadataFailed, got {other:?}"),
        }
    }
}
