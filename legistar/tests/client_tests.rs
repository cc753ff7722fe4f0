//! End-to-end tests for the high-level client against a mocked API:
//! fetch, cache to disk, reload, and column reporting.

use legistar::{Frame, LegistarClient, LegistarConfig, LegistarError};
use std::path::Path;
use wiremock::matchers::{method, path as url_path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EVENTS_BODY: &str =
    r#"[{"EventId":1,"EventDate":"2020-01-01"},{"EventId":2,"EventDate":"2020-01-02"}]"#;

fn test_client(server: &MockServer, cache_dir: &Path) -> LegistarClient {
    let config = LegistarConfig::new()
        .with_base_url(format!("{}/v1", server.uri()))
        .with_site("nyc")
        .with_cache_dir(cache_dir)
        .with_user_agent("legistar-test/1.0");

    LegistarClient::with_config(config).expect("client should build")
}

async fn mount_events(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(url_path("/v1/nyc/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_headers_follow_record_order() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();
    mount_events(&server, EVENTS_BODY).await;

    let client = test_client(&server, cache_dir.path());
    let headers = client.headers("events").await.expect("headers should succeed");

    assert_eq!(headers, ["EventId", "EventDate"]);
}

#[tokio::test]
async fn test_cache_writes_payload_verbatim() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();
    mount_events(&server, EVENTS_BODY).await;

    let client = test_client(&server, cache_dir.path());
    let (value, path) = client.cache("events").await.expect("cache should succeed");

    assert_eq!(path, cache_dir.path().join("events.txt"));
    let on_disk = std::fs::read_to_string(&path).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(reparsed, value);
    assert_eq!(reparsed, serde_json::from_str::<serde_json::Value>(EVENTS_BODY).unwrap());
}

/// Round trip: columns inferred from the cached file match the in-memory
/// inference, and the header count equals the distinct top-level keys
#[tokio::test]
async fn test_disk_round_trip_matches_in_memory() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();
    mount_events(&server, EVENTS_BODY).await;

    let client = test_client(&server, cache_dir.path());

    let in_memory = client.headers("events").await.unwrap();
    let via_disk = client.cached_headers("events").await.unwrap();

    assert_eq!(in_memory, via_disk);
    assert_eq!(via_disk.len(), 2);
}

#[tokio::test]
async fn test_recaching_overwrites_the_file() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();
    mount_events(&server, EVENTS_BODY).await;

    let client = test_client(&server, cache_dir.path());
    let (_, path) = client.cache("events").await.unwrap();

    // Same query, different payload: the file must be replaced, not
    // appended to or versioned
    server.reset().await;
    mount_events(&server, r#"[{"EventId":3}]"#).await;

    let (second, _) = client.cache("events").await.unwrap();
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, second);
    assert_eq!(on_disk, serde_json::json!([{"EventId": 3}]));
}

#[tokio::test]
async fn test_rejected_query_writes_no_cache_file() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(url_path("/v1/nyc/bogus"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server, cache_dir.path());
    let err = client.cache("bogus").await.expect_err("404 should fail");

    assert!(err.is_rejected_query());
    // The error is attributable, never a silent empty result
    assert!(format!("{}", err).contains("404"));
    assert!(!client.cache_path("bogus").exists());
}

#[tokio::test]
async fn test_loading_an_uncached_query_is_io_error() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();

    let client = test_client(&server, cache_dir.path());
    let err = client.load_cached("never-cached").await.expect_err("missing file");

    assert!(matches!(err, LegistarError::Io(_)));
}

#[tokio::test]
async fn test_empty_success_body_yields_no_headers() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(url_path("/v1/nyc/events"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server, cache_dir.path());
    let headers = client.headers("events").await.expect("empty body is valid");

    assert!(headers.is_empty());
}

#[tokio::test]
async fn test_nested_query_caches_under_subdirectory() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(url_path("/v1/nyc/events/42/eventitems"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"[{"EventItemId":9}]"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server, cache_dir.path());
    let (_, path) = client.cache("events/42/eventitems").await.unwrap();

    assert_eq!(path, cache_dir.path().join("events/42/eventitems.txt"));
    assert!(path.exists());

    let frame = client.load_cached("events/42/eventitems").await.unwrap();
    assert_eq!(frame.columns(), ["EventItemId"]);
}

#[tokio::test]
async fn test_frame_from_path_reads_cache_file() {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();
    mount_events(&server, EVENTS_BODY).await;

    let client = test_client(&server, cache_dir.path());
    let (_, path) = client.cache("events").await.unwrap();

    // Library users can load the cached file without a client
    let frame = Frame::from_path(&path).unwrap();
    assert_eq!(frame.columns(), ["EventId", "EventDate"]);
    assert_eq!(frame.len(), 2);
}

#[tokio::test]
async fn test_validate_cache_dir_creates_missing_directory() {
    let server = MockServer::start().await;
    let parent = tempfile::tempdir().unwrap();
    let nested = parent.path().join("does-not-exist-yet");

    let client = test_client(&server, &nested);
    client.validate_cache_dir().await.expect("directory should be created");

    assert!(nested.is_dir());
}
