//! Base transport behavior: URL joining, status validation and retries.

use super::common::{fast_config, fast_retry, init_tracing, NumberedAttempts};
use jamf_pro_api::client::{retry_on_not_found, ApiFamily, BaseClient, ClientConfig, ErrorKind, Uri};
use serde::Deserialize;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Widget {
    id: i32,
}

fn classic_client(server: &MockServer, config: ClientConfig) -> BaseClient {
    BaseClient::with_config(&server.uri(), ApiFamily::Classic, config)
        .expect("Failed to create base client")
}

// ============================================================================
// URL joining
// ============================================================================

#[test]
fn test_url_join_is_deterministic() {
    let uri = Uri::new("/computergroups/name/Lab Macs")
        .param("z", "last")
        .param("a", "first")
        .param("a", "second");

    let urls: Vec<String> = (0..3)
        .map(|_| {
            BaseClient::new("https://example.jamfcloud.com/", ApiFamily::Classic)
                .unwrap()
                .endpoint()
                .url_for(&uri)
                .to_string()
        })
        .collect();

    assert_eq!(
        urls[0],
        "https://example.jamfcloud.com/JSSResource/computergroups/name/Lab%20Macs?a=first&a=second&z=last"
    );
    assert!(urls.iter().all(|url| url == &urls[0]));
}

// ============================================================================
// Status validation
// ============================================================================

#[tokio::test]
async fn test_accepted_status_succeeds_regardless_of_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets"))
        .respond_with(ResponseTemplate::new(202).set_body_string("not xml at all"))
        .expect(1)
        .mount(&server)
        .await;

    let client = classic_client(&server, fast_config(3));
    let response = client
        .execute(client.get("/widgets").valid_status_codes([200, 202]))
        .await
        .expect("202 is accepted");

    assert_eq!(response.status(), 202);
    assert_eq!(response.text().await.unwrap(), "not xml at all");
}

#[tokio::test]
async fn test_override_predicate_accepts_other_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/JSSResource/widgets/id/3"))
        .respond_with(ResponseTemplate::new(409).set_body_string("already gone"))
        .mount(&server)
        .await;

    let client = classic_client(&server, fast_config(3));

    let response = client
        .execute(
            client
                .delete("/widgets/id/3")
                .valid_status_codes([200])
                .valid_status(|r| r.status() == 409),
        )
        .await
        .expect("override accepts 409");
    assert_eq!(response.status(), 409);

    let err = client
        .execute(
            client
                .delete("/widgets/id/3")
                .valid_status_codes([200])
                .valid_status(|r| r.status() == 410),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(
        err.to_string(),
        "unexpected status 409 with response: already gone"
    );
}

// ============================================================================
// Retries
// ============================================================================

#[tokio::test]
async fn test_consistency_failures_are_hidden() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<widget><id>1</id></widget>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = classic_client(&server, fast_config(5));
    let widget: Widget = client
        .execute(
            client
                .get("/widgets/id/1")
                .valid_status_codes([200])
                .consistency_failure(retry_on_not_found),
        )
        .await
        .expect("third attempt succeeds")
        .xml()
        .await
        .unwrap();

    assert_eq!(widget.id, 1);
}

#[tokio::test]
async fn test_consistency_failures_exhaust_attempts() {
    let server = MockServer::start().await;
    let responder = NumberedAttempts::new(404);
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(responder.clone())
        .mount(&server)
        .await;

    let client = classic_client(&server, fast_config(4));
    let err = client
        .execute(
            client
                .get("/widgets/id/1")
                .valid_status_codes([200])
                .consistency_failure(retry_on_not_found),
        )
        .await
        .unwrap_err();

    assert_eq!(responder.attempts(), 4);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body(), Some("attempt 4"));
}

#[tokio::test]
async fn test_failed_dependency_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets"))
        .respond_with(ResponseTemplate::new(424))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = classic_client(&server, fast_config(3));
    let response = client
        .execute(client.get("/widgets").valid_status_codes([200]))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_retries_disabled_stops_after_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = classic_client(&server, fast_config(5));
    client.set_retries_disabled(true);

    let err = client
        .execute(
            client
                .get("/widgets/id/1")
                .valid_status_codes([200])
                .consistency_failure(retry_on_not_found),
        )
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedStatusNoBody { status: 404 }));
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[tokio::test]
async fn test_create_returns_new_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/JSSResource/widgets/id/0"))
        .and(header("Content-Type", "application/xml; charset=utf-8"))
        .and(header("Authorization", "Bearer integration-token"))
        .and(body_string("<widget><name>Lab</name></widget>"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<widget><id>1</id></widget>"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = classic_client(&server, fast_config(3));
    client.set_authorization_token("integration-token");

    let created: Widget = client
        .execute(
            client
                .post("/widgets/id/0")
                .body("<widget><name>Lab</name></widget>")
                .valid_status_codes([201]),
        )
        .await
        .unwrap()
        .xml()
        .await
        .unwrap();

    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn test_delete_retries_not_found_once() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = classic_client(&server, fast_config(5));
    client
        .execute(
            client
                .delete("/widgets/id/1")
                .valid_status_codes([200])
                .consistency_failure(retry_on_not_found),
        )
        .await
        .expect("second attempt succeeds");

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_server_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .with_retry(fast_retry(5).with_server_error_retry(false))
        .build();
    let client = classic_client(&server, config);

    let err = client
        .execute(
            client
                .put("/widgets/id/1")
                .body("<widget><name>Lab</name></widget>")
                .valid_status_codes([201]),
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_forbidden_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/widgets/id/1"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let client = classic_client(&server, fast_config(3));
    let err = client
        .execute(client.get("/widgets/id/1").valid_status_codes([200]))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "unexpected status 403 received with no body");
}
