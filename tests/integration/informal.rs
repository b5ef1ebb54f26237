//! Package publishing across the Classic API and the session-based upload.

use super::common::{fast_config, init_tracing};
use jamf_pro_api::classic::Package;
use jamf_pro_api::informal::{ErrorKind, FileType};
use jamf_pro_api::{BasicCredentials, ClassicClient, InformalClient};
use wiremock::matchers::{body_bytes, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_publish_package() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/JSSResource/packages/id/0"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<package><id>31</id></package>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string("username=admin&password=p%40ss+word"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", "/index.html")
                .insert_header("Set-Cookie", "JSESSIONID=session-1; Path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dbfileupload"))
        .and(header("Cookie", "JSESSIONID=session-1"))
        .and(header("OBJECT_ID", "31"))
        .and(header("FILE_TYPE", "0"))
        .and(header("FILE_NAME", "Firefox.pkg"))
        .and(body_bytes(b"xar!".to_vec()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut classic = ClassicClient::with_config(&server.uri(), fast_config(3)).unwrap();
    classic.set_authorization_token("classic-token");
    let id = classic
        .create_package(&Package::new("Firefox", "Firefox.pkg"))
        .await
        .unwrap();

    let informal = InformalClient::with_config(
        &server.uri(),
        BasicCredentials::new("admin", "p@ss word"),
        fast_config(2),
    )
    .unwrap();
    let login = informal.create_session("/").await.unwrap();
    assert_eq!(login.header("location"), Some("/index.html"));

    informal
        .upload_distribution_file(FileType::Package, id, "Firefox.pkg", b"xar!".to_vec())
        .await
        .expect("upload should succeed");
}

#[tokio::test]
async fn test_login_redirect_is_not_followed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/elsewhere"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let informal = InformalClient::with_config(
        &server.uri(),
        BasicCredentials::new("admin", "secret"),
        fast_config(2),
    )
    .unwrap();
    let response = informal.create_session("/login").await.unwrap();
    assert_eq!(response.status(), 302);
}

#[tokio::test]
async fn test_upload_without_name_is_rejected() {
    let informal = InformalClient::new(
        "https://example.jamfcloud.com",
        BasicCredentials::new("admin", "secret"),
    )
    .unwrap();

    let err = informal
        .upload_distribution_file(FileType::Ebook, 1, "", &b"epub"[..])
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Validation(_)));
}
