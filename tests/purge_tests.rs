//! Integration tests for cache purging.
//!
//! These tests verify the purge paths, the soft purge and surrogate key
//! headers, query string handling and input validation.

use fastly_api::rest::resources::purge::{
    PurgeAllInput, PurgeInput, PurgeKeyInput, PurgeKeysInput, SOFT_PURGE_HEADER,
    SURROGATE_KEY_HEADER,
};
use fastly_api::{ApiKey, Endpoint, FastlyClient, FastlyConfig, ResourceError};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_ID: &str = "7i6HN3TK9wS159v2gPAZ8A";

fn create_client(server: &MockServer) -> FastlyClient {
    let config = FastlyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .build()
        .unwrap();
    FastlyClient::new(&config).unwrap()
}

fn purge_ok(id: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok", "id": id}))
}

// ============================================================================
// Purge by URL
// ============================================================================

#[tokio::test]
async fn test_purge_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/purge/www.example.com/images/logo.png"))
        .respond_with(purge_ok("108-1391560174-974124"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let purge = client
        .purge(&PurgeInput {
            url: "www.example.com/images/logo.png".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(purge.status.as_deref(), Some("ok"));
    assert_eq!(purge.id.as_deref(), Some("108-1391560174-974124"));
}

#[tokio::test]
async fn test_purge_url_moves_query_into_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/purge/www.example.com/search"))
        .and(query_param("q", "shoes"))
        .and(query_param("page", "2"))
        .respond_with(purge_ok("1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client
        .purge(&PurgeInput {
            url: "www.example.com/search?q=shoes&page=2&q=boots#top".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("q=shoes&page=2"));
}

#[tokio::test]
async fn test_soft_purge_url_sets_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/purge/www.example.com/"))
        .and(header(SOFT_PURGE_HEADER, "1"))
        .respond_with(purge_ok("2"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client
        .purge(&PurgeInput {
            url: "www.example.com/".to_string(),
            soft: true,
            ..Default::default()
        })
        .await
        .unwrap();
}

// ============================================================================
// Purge by Surrogate Key
// ============================================================================

#[tokio::test]
async fn test_purge_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/service/{SERVICE_ID}/purge/product-42")))
        .respond_with(purge_ok("3"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let purge = client
        .purge_key(&PurgeKeyInput {
            service_id: SERVICE_ID.to_string(),
            key: "product-42".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(purge.id.as_deref(), Some("3"));
}

#[tokio::test]
async fn test_purge_keys_sends_surrogate_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/service/{SERVICE_ID}/purge")))
        .and(header(SURROGATE_KEY_HEADER, "foo bar baz"))
        .and(header(SOFT_PURGE_HEADER, "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "foo": "17395-1667333-1",
            "bar": "17395-1667333-2",
            "baz": "17395-1667333-3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let ids = client
        .purge_keys(&PurgeKeysInput {
            service_id: SERVICE_ID.to_string(),
            keys: vec!["foo".to_string(), "bar".to_string(), "baz".to_string()],
            soft: true,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(ids.len(), 3);
    assert_eq!(ids["bar"], "17395-1667333-2");
}

// ============================================================================
// Purge All
// ============================================================================

#[tokio::test]
async fn test_purge_all() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/service/{SERVICE_ID}/purge_all")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let purge = client
        .purge_all(&PurgeAllInput {
            service_id: SERVICE_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(purge.status.as_deref(), Some("ok"));
    assert!(purge.id.is_none());
}

#[tokio::test]
async fn test_concurrent_purges_complete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(purge_ok("4").set_delay(std::time::Duration::from_millis(20)))
        .expect(3)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let key = |k: &str| PurgeKeyInput {
        service_id: SERVICE_ID.to_string(),
        key: k.to_string(),
        ..Default::default()
    };
    let (a, b, c) = (key("a"), key("b"), key("c"));

    let (ra, rb, rc) = tokio::join!(client.purge_key(&a), client.purge_key(&b), client.purge_key(&c));

    assert!(ra.is_ok());
    assert!(rb.is_ok());
    assert!(rc.is_ok());
}

#[tokio::test]
async fn test_concurrent_key_purges_overlap() {
    let server = MockServer::start().await;
    let delay = std::time::Duration::from_millis(300);

    Mock::given(method("POST"))
        .respond_with(purge_ok("1").set_delay(delay))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let key = |k: &str| PurgeKeyInput {
        service_id: SERVICE_ID.to_string(),
        key: k.to_string(),
        ..Default::default()
    };
    let (a, b) = (key("a"), key("b"));
    let started = std::time::Instant::now();

    let (ra, rb) = tokio::join!(client.purge_key(&a), client.purge_key(&b));

    assert!(ra.is_ok());
    assert!(rb.is_ok());
    assert!(started.elapsed() < delay * 2);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_purge_validation_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let result = client.purge(&PurgeInput::default()).await;
    assert!(matches!(result, Err(ResourceError::MissingUrl)));

    let result = client
        .purge_key(&PurgeKeyInput {
            key: "foo".to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(ResourceError::MissingServiceId)));

    let result = client
        .purge_key(&PurgeKeyInput {
            service_id: SERVICE_ID.to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(ResourceError::MissingKey)));

    let result = client
        .purge_keys(&PurgeKeysInput {
            service_id: SERVICE_ID.to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(ResourceError::MissingKeys)));

    let result = client.purge_all(&PurgeAllInput::default()).await;
    assert!(matches!(result, Err(ResourceError::MissingServiceId)));
}
