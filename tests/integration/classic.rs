//! Classic API workflows through the facade.

use super::common::{fast_config, init_tracing};
use jamf_pro_api::classic::{ComputerGroup, ErrorKind, Package, Policy};
use jamf_pro_api::ClassicClient;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ClassicClient {
    let mut client =
        ClassicClient::with_config(&server.uri(), fast_config(3)).expect("Failed to create client");
    client.set_authorization_token("classic-token");
    client
}

#[tokio::test]
async fn test_package_lifecycle() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/JSSResource/packages/id/0"))
        .and(header("Authorization", "Bearer classic-token"))
        .and(body_string_contains("<filename>Firefox.pkg</filename>"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<package><id>31</id></package>"))
        .expect(1)
        .mount(&server)
        .await;
    // Freshly created records can 404 for a moment.
    Mock::given(method("GET"))
        .and(path("/JSSResource/packages/id/31"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/packages/id/31"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<package><id>31</id><name>Firefox</name><filename>Firefox.pkg</filename><priority>10</priority></package>",
        ))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/JSSResource/packages/id/31"))
        .and(body_string_contains("<priority>5</priority>"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<package><id>31</id></package>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/packages"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<packages><size>1</size><package><id>31</id><name>Firefox</name></package></packages>",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/JSSResource/packages/id/31"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let id = client
        .create_package(&Package::new("Firefox", "Firefox.pkg"))
        .await
        .expect("create should succeed");
    assert_eq!(id, 31);

    let mut package = client.get_package(id).await.expect("get should succeed");
    assert_eq!(package.name.as_deref(), Some("Firefox"));
    assert_eq!(package.priority, Some(10));

    package.priority = Some(5);
    client
        .update_package(&package)
        .await
        .expect("update should succeed");

    let list = client.list_packages().await.expect("list should succeed");
    assert_eq!(list.size, Some(1));
    assert_eq!(list.packages[0].name.as_deref(), Some("Firefox"));

    client.delete_package(id).await.expect("delete should succeed");
}

#[tokio::test]
async fn test_validation_happens_before_any_request() {
    let server = MockServer::start().await;
    let client = client(&server);

    let err = client
        .create_policy(&Policy::default())
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Validation(_)));

    let err = client
        .update_computer_group(&ComputerGroup::new_static("Lab Macs"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Validation(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_policy_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/JSSResource/policies/id/0"))
        .and(body_string_contains("<policy><general><name>Install Firefox</name>"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<policy><id>7</id></policy>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/policies/id/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<policy><general><id>7</id><name>Install Firefox</name><enabled>true</enabled></general></policy>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let id = client
        .create_policy(&Policy::named("Install Firefox"))
        .await
        .unwrap();
    let policy = client.get_policy(id).await.unwrap();

    assert_eq!(policy.id(), Some(7));
    assert_eq!(policy.name(), Some("Install Firefox"));
}

#[tokio::test]
async fn test_error_names_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/JSSResource/computergroups/id/9"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.delete_computer_group(9).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.to_string(),
        "ComputerGroups.delete: unexpected status 401 with response: Unauthorized"
    );
}
