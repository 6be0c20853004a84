use crate::common::{fixture, mock_op, setup_server};
use eoddata_rs::{EodClient, EodError};
use httpmock::Method::POST;
use url::Url;

#[tokio::test]
async fn refused_login_is_an_auth_error_and_nothing_else_is_sent() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(POST).path("/Login");
        then.status(200).body(fixture("Login", "denied", "xml"));
    });
    let countries = mock_op(&server, "CountryList", "all");

    let client = crate::common::client(&server);
    let err = client.countries().await.unwrap_err();

    match err {
        EodError::Auth(msg) => assert_eq!(msg, "Invalid Login Credentials"),
        other => panic!("expected Auth error, got {other:?}"),
    }
    login.assert();
    countries.assert_calls(0);
}

#[tokio::test]
async fn missing_credentials_fail_before_any_request() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(POST).path("/Login");
        then.status(200).body(fixture("Login", "ok", "xml"));
    });

    let client = EodClient::builder()
        .endpoint(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .build()
        .unwrap();

    let err = client.token().await.unwrap_err();
    assert!(matches!(err, EodError::Auth(_)), "got {err:?}");
    login.assert_calls(0);
}

#[tokio::test]
async fn login_http_failure_maps_to_status() {
    let server = setup_server();
    let _login = server.mock(|when, then| {
        when.method(POST).path("/Login");
        then.status(503).body("unavailable");
    });

    let client = crate::common::client(&server);
    let err = client.login().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}
