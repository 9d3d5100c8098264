//! Tests for the feed client.

use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::FeedClient;
use crate::config::GalleryConfig;
use apod_common::{FetchError, MediaType};

fn client_for(server: &MockServer) -> FeedClient {
    let config = GalleryConfig::with_feed_url(format!("{}/data.json", server.uri()));
    FeedClient::new(&config).unwrap()
}

fn feed_json() -> serde_json::Value {
    serde_json::json!([
        {
            "date": "2024-01-01",
            "title": "New Year Nebula",
            "explanation": "Gas and dust.",
            "media_type": "image",
            "url": "https://example.com/a.jpg",
            "hdurl": "https://example.com/a_hd.jpg"
        },
        {
            "date": "2024-01-02",
            "title": "Launch",
            "explanation": "A rocket.",
            "media_type": "video",
            "url": "https://www.youtube.com/embed/xyz",
            "thumbnail_url": "https://img.youtube.com/vi/xyz/0.jpg",
            "copyright": "Someone"
        }
    ])
}

#[tokio::test]
async fn fetch_parses_full_feed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json()))
        .mount(&mock_server)
        .await;

    let entries = client_for(&mock_server).fetch().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "New Year Nebula");
    assert_eq!(entries[1].media_type, MediaType::Video);
    assert_eq!(entries[1].copyright.as_deref(), Some("Someone"));
}

#[tokio::test]
async fn fetch_empty_array_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let entries = client_for(&mock_server).fetch().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn fetch_404_returns_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    match client_for(&mock_server).fetch().await {
        Err(FetchError::HttpStatus(status)) => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        }
        other => panic!("Expected FetchError::HttpStatus(404), got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_malformed_body_returns_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch().await;
    assert!(matches!(result, Err(FetchError::Parse(_))), "got: {result:?}");
}

#[tokio::test]
async fn fetch_skips_incomplete_records_and_keeps_the_rest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "date": "2024-01-01",
                "title": "Complete",
                "explanation": "Has every field.",
                "media_type": "image",
                "url": "https://example.com/a.jpg"
            },
            {
                "date": "2024-01-02",
                "title": "Interactive",
                "explanation": "No url for this one.",
                "media_type": "other"
            },
            {
                "date": "2024-01-03",
                "explanation": "No title here.",
                "media_type": "image",
                "url": "https://example.com/c.jpg"
            },
            {
                "date": "January 4th",
                "title": "Bad date",
                "explanation": "Unparseable date.",
                "media_type": "image",
                "url": "https://example.com/d.jpg"
            }
        ])))
        .mount(&mock_server)
        .await;

    let entries = client_for(&mock_server).fetch().await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Complete");
}

#[tokio::test]
async fn fetch_object_instead_of_array_returns_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "entries": [] })),
        )
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch().await;
    assert!(matches!(result, Err(FetchError::Parse(_))), "got: {result:?}");
}

#[tokio::test]
async fn fetch_unreachable_host_returns_network_error() {
    // Nothing listens on the discard port
    let config = GalleryConfig::with_feed_url("http://127.0.0.1:9/data.json");
    let client = FeedClient::new(&config).unwrap();

    let result = client.fetch().await;
    assert!(matches!(result, Err(FetchError::Network(_))), "got: {result:?}");
}
