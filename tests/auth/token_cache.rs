use crate::common::{builder, client, mock_login, mock_op, setup_server};
use std::time::Duration;

#[tokio::test]
async fn token_is_reused_across_calls() {
    let server = setup_server();
    let login = mock_login(&server);
    let countries = mock_op(&server, "CountryList", "all");

    let client = client(&server);
    client.countries().await.unwrap();
    client.countries().await.unwrap();

    login.assert_calls(1);
    countries.assert_calls(2);
}

#[tokio::test]
async fn clones_share_the_cached_token() {
    let server = setup_server();
    let login = mock_login(&server);
    let countries = mock_op(&server, "CountryList", "all");

    let client = client(&server);
    let other = client.clone();
    client.countries().await.unwrap();
    other.countries().await.unwrap();

    login.assert_calls(1);
    countries.assert_calls(2);
}

#[tokio::test]
async fn token_is_refreshed_after_ttl() {
    let server = setup_server();
    let login = mock_login(&server);
    let countries = mock_op(&server, "CountryList", "all");

    let client = builder(&server)
        .token_ttl(Duration::from_millis(50))
        .build()
        .unwrap();

    client.countries().await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    client.countries().await.unwrap();

    login.assert_calls(2);
    countries.assert_calls(2);
}

#[tokio::test]
async fn disabled_cache_logs_in_for_every_call() {
    let server = setup_server();
    let login = mock_login(&server);
    let countries = mock_op(&server, "CountryList", "all");

    let client = builder(&server).token_cache(false).build().unwrap();
    for _ in 0..3 {
        client.countries().await.unwrap();
    }

    login.assert_calls(3);
    countries.assert_calls(3);
}

#[tokio::test]
async fn concurrent_callers_share_one_login() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/Login");
        then.status(200)
            .delay(Duration::from_millis(100))
            .body(crate::common::fixture("Login", "ok", "xml"));
    });
    let countries = mock_op(&server, "CountryList", "all");

    let client = client(&server);
    let calls = (0..5).map(|_| client.countries());
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
    login.assert_calls(1);
    countries.assert_calls(5);
}

#[tokio::test]
async fn concurrent_callers_share_one_refused_login() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/Login");
        then.status(200)
            .delay(Duration::from_millis(100))
            .body(crate::common::fixture("Login", "denied", "xml"));
    });
    let countries = mock_op(&server, "CountryList", "all");

    let client = client(&server);
    let calls = (0..5).map(|_| client.countries());
    let results = futures::future::join_all(calls).await;

    for res in results {
        match res {
            Err(eoddata_rs::EodError::Auth(msg)) => assert_eq!(msg, "Invalid Login Credentials"),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }
    login.assert_calls(1);
    countries.assert_calls(0);
}

#[tokio::test]
async fn a_later_call_after_a_refused_login_tries_again() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/Login");
        then.status(200)
            .body(crate::common::fixture("Login", "denied", "xml"));
    });

    let client = client(&server);
    assert!(client.countries().await.is_err());
    assert!(client.countries().await.is_err());

    login.assert_calls(2);
}

#[tokio::test]
async fn invalidate_forces_a_new_login() {
    let server = setup_server();
    let login = mock_login(&server);
    let countries = mock_op(&server, "CountryList", "all");

    let client = client(&server);
    client.countries().await.unwrap();
    client.invalidate_token().await;
    client.countries().await.unwrap();

    login.assert_calls(2);
    countries.assert_calls(2);
}

#[tokio::test]
async fn serial_client_still_completes_concurrent_calls() {
    let server = setup_server();
    let _login = mock_login(&server);
    let countries = mock_op(&server, "CountryList", "all");

    let client = builder(&server).max_in_flight(1).build().unwrap();
    let (a, b) = tokio::join!(client.countries(), client.countries());

    assert_eq!(a.unwrap(), b.unwrap());
    countries.assert_calls(2);
}
