//! Integration tests for the REST client request pipeline.
//!
//! These tests run the full path: path building, query encoding, the
//! transport, envelope decoding and error classification, against a local
//! mock server.

use std::sync::Arc;
use std::time::Duration;

use dnsimple::clients::{HttpMethod, HttpRequest, TransportErrorKind};
use dnsimple::rest::{build_path, ListOptions};
use dnsimple::{AccessToken, ApiError, BaseUrl, DnsimpleConfig, RestClient};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
struct Domain {
    id: u64,
    name: String,
}

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer) -> RestClient {
    let config = DnsimpleConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_get_sends_versioned_path_and_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains/example.com"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": 1, "name": "example.com"}}))
                .insert_header("X-Request-Id", "req-123"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let path = build_path("1010", &["domains", "example.com"]).unwrap();
    let response = client.get::<Domain>(&path, None).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.name, "example.com");
    assert_eq!(response.request_id(), Some("req-123"));
    assert!(response.pagination().is_none());
}

#[tokio::test]
async fn test_list_encodes_options_and_decodes_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "2"))
        .and(query_param("sort", "expiration:asc"))
        .and(query_param("filter[name_like]", "example"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "data": [
                        {"id": 3, "name": "example.net"},
                        {"id": 4, "name": "example.org"}
                    ],
                    "pagination": {
                        "current_page": 2,
                        "per_page": 2,
                        "total_entries": 5,
                        "total_pages": 3
                    }
                }))
                .insert_header("X-RateLimit-Limit", "2400")
                .insert_header("X-RateLimit-Remaining", "2399")
                .insert_header("X-RateLimit-Reset", "1700000000"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let options = ListOptions::new()
        .page(2)
        .per_page(2)
        .sort("expiration:asc")
        .filter("name_like", "example");

    let response = client
        .get::<Vec<Domain>>("1010/domains", Some(&options))
        .await
        .unwrap();

    assert_eq!(response.len(), 2);
    assert_eq!(response[0].name, "example.net");

    let pagination = response.pagination().unwrap();
    assert_eq!(pagination.current_page, 2);
    assert_eq!(pagination.total_entries, 5);
    assert!(response.has_next_page());

    let rate_limit = response.rate_limit().unwrap();
    assert_eq!(rate_limit.limit, 2400);
    assert_eq!(rate_limit.remaining, 2399);
    assert_eq!(rate_limit.reset, 1_700_000_000);
}

#[tokio::test]
async fn test_escaped_segments_reach_the_server_intact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains/a%20b%2Fc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": 9, "name": "a b/c"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let path = build_path("1010", &["domains", "a b/c"]).unwrap();
    let response = client.get::<Domain>(&path, None).await.unwrap();

    assert_eq!(response.id, 9);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/1010/domains"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "example.com"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": {"id": 42, "name": "example.com"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .post::<Domain, _>("1010/domains", &json!({"name": "example.com"}))
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    assert_eq!(response.id, 42);
}

#[tokio::test]
async fn test_delete_with_no_content_yields_default() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/1010/domains/example.com"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .delete::<()>("1010/domains/example.com")
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
    assert!(response.pagination().is_none());
}

#[tokio::test]
async fn test_no_content_into_collection_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .get::<Vec<Domain>>("1010/domains", None)
        .await
        .unwrap();

    assert!(response.is_empty());
}

// ============================================================================
// Error Classification
// ============================================================================

#[tokio::test]
async fn test_validation_failure_keeps_all_field_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/1010/domains"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({
                    "message": "Validation failed",
                    "errors": {
                        "name": ["can't be blank", "is invalid"],
                        "registrant_id": ["is required"]
                    }
                }))
                .insert_header("X-Request-Id", "req-422"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .post::<Domain, _>("1010/domains", &json!({"name": ""}))
        .await
        .unwrap_err();

    match &err {
        ApiError::ValidationFailed {
            message, errors, ..
        } => {
            assert_eq!(message, "Validation failed");
            assert_eq!(
                errors.get("name"),
                Some(&vec!["can't be blank".to_string(), "is invalid".to_string()])
            );
            assert_eq!(
                errors.get("registrant_id"),
                Some(&vec!["is required".to_string()])
            );
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.request_id(), Some("req-422"));
}

#[tokio::test]
async fn test_rate_limited_carries_reset_time() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"message": "Rate limit exceeded"}))
                .insert_header("X-RateLimit-Reset", "1700000000"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .get::<Vec<Domain>>("1010/domains", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::RateLimited {
            reset: Some(1_700_000_000),
            ..
        }
    ));
    assert_eq!(
        err.rate_limit_reset_at().unwrap().timestamp(),
        1_700_000_000
    );
}

#[tokio::test]
async fn test_not_found_unauthorized_and_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains/missing.com"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Domain `missing.com` not found"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/whoami"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "Authentication failed"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server);

    let not_found = client
        .get::<Domain>("1010/domains/missing.com", None)
        .await
        .unwrap_err();
    assert!(
        matches!(not_found, ApiError::NotFound { ref message, .. } if message.contains("missing.com"))
    );

    let unauthorized = client
        .get::<serde_json::Value>("whoami", None)
        .await
        .unwrap_err();
    assert!(matches!(unauthorized, ApiError::Unauthorized { .. }));

    let server_error = client
        .get::<Vec<Domain>>("1010/domains", None)
        .await
        .unwrap_err();
    assert!(matches!(
        server_error,
        ApiError::ServerError { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": [oops"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .get::<Vec<Domain>>("1010/domains", None)
        .await
        .unwrap_err();

    match err {
        ApiError::DecodeFailure {
            status,
            body_snippet,
            ..
        } => {
            assert_eq!(status, 200);
            assert!(body_snippet.starts_with("{\"data\""));
        }
        other => panic!("expected DecodeFailure, got {other:?}"),
    }
}

// ============================================================================
// Transport Failures
// ============================================================================

#[tokio::test]
async fn test_cancel_aborts_in_flight_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "1010/domains")
        .build()
        .unwrap();

    let err = client
        .request_with_cancel::<Vec<Domain>, _>(
            request,
            tokio::time::sleep(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(err.is_canceled());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_timeout_is_reported_as_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = DnsimpleConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let err = client
        .get::<Vec<Domain>>("1010/domains", None)
        .await
        .unwrap_err();

    assert_eq!(err.transport_kind(), Some(TransportErrorKind::Timeout));
}

#[tokio::test]
async fn test_connection_refused_is_connect_failure() {
    let config = DnsimpleConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let err = client
        .get::<serde_json::Value>("whoami", None)
        .await
        .unwrap_err();

    assert_eq!(err.transport_kind(), Some(TransportErrorKind::Connect));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;

    for id in 1..=5u64 {
        Mock::given(method("GET"))
            .and(path(format!("/v2/1010/domains/d{id}.com")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": id, "name": format!("d{id}.com")}})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = Arc::new(create_client(&server));
    let mut handles = Vec::new();
    for id in 1..=5u64 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let domain = format!("d{id}.com");
            let path = build_path("1010", &["domains", domain.as_str()]).unwrap();
            client.get::<Domain>(&path, None).await
        }));
    }

    for (index, handle) in handles.into_iter().enumerate() {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.id, index as u64 + 1);
        assert_eq!(response.name, format!("d{}.com", index + 1));
    }
}
