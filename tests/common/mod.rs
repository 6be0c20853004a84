#![allow(dead_code)]

use eoddata_rs::{EodClient, EodClientBuilder};
use httpmock::{Method::POST, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const USERNAME: &str = "demo-user";
pub const PASSWORD: &str = "demo-pass";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(operation: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", operation, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A builder pointed at the mock server with test credentials.
pub fn builder(server: &MockServer) -> EodClientBuilder {
    EodClient::builder()
        .endpoint(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .credentials(USERNAME, PASSWORD)
}

pub fn client(server: &MockServer) -> EodClient {
    builder(server).build().unwrap()
}

pub fn mock_login(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/Login")
            .form_urlencoded_tuple("Username", USERNAME)
            .form_urlencoded_tuple("Password", PASSWORD);
        then.status(200)
            .header("content-type", "text/xml; charset=utf-8")
            .body(fixture("Login", "ok", "xml"));
    })
}

/// `op` answered with the given fixture, only when sent with the fixture login token.
pub fn mock_op<'a>(server: &'a MockServer, op: &'a str, key: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/{}", op))
            .form_urlencoded_tuple("Token", "TOKEN-1");
        then.status(200)
            .header("content-type", "text/xml; charset=utf-8")
            .body(fixture(op, key, "xml"));
    })
}
