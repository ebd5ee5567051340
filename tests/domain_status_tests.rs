//! Integration tests for domain availability checks.

use fastly_api::rest::resources::domain_status::{self, GetInput, Scope};
use fastly_api::{ApiKey, Endpoint, FastlyClient, FastlyConfig, ResourceError};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> FastlyClient {
    let config = FastlyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .build()
        .unwrap();
    FastlyClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_domain_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/domains/v1/tools/status"))
        .and(query_param("domain", "fastly-sdk-test.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "domain": "fastly-sdk-test.com",
            "zone": "com",
            "status": "undelegated inactive",
            "tags": "generic"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let status = domain_status::get(
        &client,
        &GetInput {
            domain: "fastly-sdk-test.com".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(status.domain.as_deref(), Some("fastly-sdk-test.com"));
    assert_eq!(status.zone.as_deref(), Some("com"));
    assert_eq!(status.status.as_deref(), Some("undelegated inactive"));
    assert!(status.scope.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("domain=fastly-sdk-test.com"));
}

#[tokio::test]
async fn test_get_domain_status_with_estimate_scope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/domains/v1/tools/status"))
        .and(query_param("domain", "fasterthancdn.org"))
        .and(query_param("scope", "estimate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "domain": "fasterthancdn.org",
            "zone": "org",
            "status": "marketed priced transferable active",
            "scope": "estimate",
            "tags": "generic",
            "offers": [
                {"vendor": "Dan.com", "currency": "USD", "price": "1195.00"},
                {"vendor": "Sedo", "currency": "EUR", "price": 990}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let status = domain_status::get(
        &client,
        &GetInput {
            domain: "fasterthancdn.org".to_string(),
            scope: Some(Scope::Estimate),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(status.scope.as_deref(), Some("estimate"));
    assert_eq!(status.offers.len(), 2);
    assert_eq!(status.offers[0].currency.as_deref(), Some("USD"));
    assert_eq!(status.offers[0].price.as_deref(), Some("1195.00"));
    assert_eq!(status.offers[1].price.as_deref(), Some("990"));
}

#[tokio::test]
async fn test_get_domain_status_with_null_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/domains/v1/tools/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "domain": "x.com",
            "zone": null,
            "status": "undelegated inactive",
            "tags": "generic",
            "scope": "precise",
            "offers": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let status = domain_status::get(
        &client,
        &GetInput {
            domain: "x.com".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(status.zone.is_none());
    assert_eq!(status.scope.as_deref(), Some("precise"));
    assert!(status.offers.is_empty());
}

#[tokio::test]
async fn test_domain_is_required() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = domain_status::get(&client, &GetInput::default()).await;

    assert!(matches!(result, Err(ResourceError::MissingDomain)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "missing required field 'Domain'"
    );
}
