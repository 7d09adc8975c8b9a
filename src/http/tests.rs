//! Tests for the HTTP transport module

use super::*;
use crate::config::ClientSettings;
use crate::error::Error;
use crate::executor::QueryExecutor;
use crate::types::Variables;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        api_key: Some("NRAK-TEST".to_string()),
        endpoint: Some(format!("{}/graphql", server.uri())),
        ..Default::default()
    }
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("nerdgraph-sync/"));
}

#[tokio::test]
async fn test_http_client_post_json_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("X-Custom", "value"))
        .and(header("user-agent", "test-agent/1.0"))
        .and(body_json(json!({"query": "{ actor { user { name } } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 123}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let data: serde_json::Value = client
        .post_json(
            &format!("{}/graphql", mock_server.uri()),
            &json!({"query": "{ actor { user { name } } }"}),
        )
        .await
        .unwrap();
    assert_eq!(data["data"]["id"], 123);
}

#[tokio::test]
async fn test_http_client_error_status_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let err = client
        .post_json::<serde_json::Value>(&format!("{}/graphql", mock_server.uri()), &json!({}))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .post_json::<serde_json::Value>(&format!("{}/slow", mock_server.uri()), &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[test]
fn test_http_client_debug_hides_headers() {
    let config = HttpClientConfig::builder()
        .header(API_KEY_HEADER, "NRAK-SECRET")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(!debug.contains("NRAK-SECRET"));
}

#[tokio::test]
async fn test_nerdgraph_client_sends_query_and_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header(API_KEY_HEADER, "NRAK-TEST"))
        .and(body_json(json!({
            "query": "{ actor { user { name } } }",
            "variables": {"cursor": "abc"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"actor": {}}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NerdGraphClient::new(&settings_for(&mock_server)).unwrap();

    let mut variables = Variables::new();
    variables.insert("cursor".to_string(), json!("abc"));

    let body = client
        .execute_query("{ actor { user { name } } }", &variables)
        .await
        .unwrap();
    assert_eq!(body, json!({"data": {"actor": {}}}));
}

#[tokio::test]
async fn test_nerdgraph_client_graphql_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Invalid API key"}]
        })))
        .mount(&mock_server)
        .await;

    let client = NerdGraphClient::new(&settings_for(&mock_server)).unwrap();
    let err = client
        .execute_query("{ actor { user { name } } }", &Variables::new())
        .await
        .unwrap_err();

    match err {
        Error::GraphQl { messages } => assert_eq!(messages, vec!["Invalid API key"]),
        other => panic!("Expected GraphQl, got {other:?}"),
    }
}

#[test]
fn test_nerdgraph_client_requires_api_key() {
    let err = NerdGraphClient::new(&ClientSettings::default()).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

#[test]
fn test_nerdgraph_client_endpoint() {
    let settings = ClientSettings {
        api_key: Some("key".to_string()),
        ..Default::default()
    };
    let client = NerdGraphClient::new(&settings).unwrap();
    assert_eq!(client.endpoint(), "https://api.newrelic.com/graphql");
}
