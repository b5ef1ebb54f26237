//! Jamf Pro API workflows through the facade.

use super::common::fast_config;
use jamf_pro_api::pro::{Category, ErrorKind, ListOptions, Script, ScriptPriority};
use jamf_pro_api::{BasicCredentials, JamfProClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_then_categories() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .and(header("Authorization", "Basic YXBpOnMzY3JldA=="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "pro-token",
            "expires": "2030-01-01T00:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/categories"))
        .and(header("Authorization", "Bearer pro-token"))
        .and(body_json(json!({"name": "Browsers", "priority": 9})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "4",
            "href": "https://example.jamfcloud.com/api/v1/categories/4"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .and(header("Authorization", "Bearer pro-token"))
        .and(query_param("page", "0"))
        .and(query_param("page-size", "100"))
        .and(query_param("sort", "name:asc,id:desc"))
        .and(query_param("filter", "name==\"Browsers\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "results": [{"id": "4", "name": "Browsers", "priority": 9}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/categories/delete-multiple"))
        .and(body_json(json!({"ids": ["4"]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut client =
        JamfProClient::with_config(&server.uri(), fast_config(3)).expect("Failed to create client");
    let token = client
        .authenticate(&BasicCredentials::new("api", "s3cret"))
        .await
        .expect("authentication should succeed");
    assert!(token.expires_at().unwrap().is_some());
    assert!(client.inner().has_authorization_token());

    let id = client
        .create_category(&Category::new("Browsers", 9))
        .await
        .unwrap();
    assert_eq!(id, "4");

    let options = ListOptions::new()
        .page(0)
        .page_size(100)
        .sort("name:asc")
        .sort("id:desc")
        .filter("name==\"Browsers\"");
    let list = client.list_categories(&options).await.unwrap();
    assert_eq!(list.total_count, Some(1));
    assert_eq!(list.results[0].id.as_deref(), Some("4"));

    let ids: Vec<String> = list.results.iter().filter_map(|c| c.id.clone()).collect();
    client.delete_categories(&ids).await.unwrap();
}

#[tokio::test]
async fn test_failed_dependency_then_script() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/scripts/12"))
        .respond_with(ResponseTemplate::new(424))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/scripts/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "12",
            "name": "hello.sh",
            "priority": "AT_REBOOT",
            "scriptContents": "#!/bin/sh\necho hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = JamfProClient::with_config(&server.uri(), fast_config(3)).unwrap();
    client.set_authorization_token("pro-token");

    let script: Script = client.get_script("12").await.unwrap();
    assert_eq!(script.name.as_deref(), Some("hello.sh"));
    assert_eq!(script.priority, Some(ScriptPriority::AtReboot));
}

#[tokio::test]
async fn test_bad_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = JamfProClient::with_config(&server.uri(), fast_config(3)).unwrap();
    let err = client
        .authenticate(&BasicCredentials::new("api", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(matches!(err.kind, ErrorKind::Client { .. }));
    assert!(!client.inner().has_authorization_token());
}
