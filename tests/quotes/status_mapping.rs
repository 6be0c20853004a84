use crate::common::{builder, client, mock_login, setup_server};
use eoddata_rs::{EodError, Exchange};
use httpmock::Method::POST;
use std::time::Duration;

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _quotes = server.mock(|when, then| {
        when.method(POST).path("/QuoteList");
        then.status(500).body("Server Error");
    });

    let client = client(&server);
    let err = Exchange::new(&client, "NASDAQ").quotes().await.unwrap_err();

    let text = err.to_string();
    match err {
        EodError::Status {
            status,
            url,
            operation,
            context,
        } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/QuoteList"), "url was {url}");
            assert_eq!(operation, "QuoteList");
            assert_eq!(context, "NASDAQ");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert!(
        text.starts_with("Failed to get QuoteList (NASDAQ): status 500"),
        "message was {text}"
    );
}

#[tokio::test]
async fn slow_response_times_out_without_retry() {
    let server = setup_server();
    let _login = mock_login(&server);
    let quotes = server.mock(|when, then| {
        when.method(POST).path("/QuoteList");
        then.status(200)
            .delay(Duration::from_millis(800))
            .body(crate::common::fixture("QuoteList", "NASDAQ", "xml"));
    });

    let client = builder(&server)
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let err = Exchange::new(&client, "NASDAQ").quotes().await.unwrap_err();

    assert!(matches!(err, EodError::Http(_)), "got {err:?}");
    assert!(err.is_timeout());
    quotes.assert_calls(1);
}

#[tokio::test]
async fn garbage_body_is_an_xml_error() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _quotes = server.mock(|when, then| {
        when.method(POST).path("/QuoteList");
        then.status(200).body("<RESPONSE Message=\"Success\"><QUOTES>");
    });

    let client = client(&server);
    let err = Exchange::new(&client, "NASDAQ").quotes().await.unwrap_err();
    assert!(matches!(err, EodError::Xml(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_data_node_carries_the_server_message() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _quotes = server.mock(|when, then| {
        when.method(POST).path("/QuoteList");
        then.status(200)
            .body(r#"<RESPONSE Source="QuoteList" Message="Invalid Exchange" Success="false" />"#);
    });

    let client = client(&server);
    let err = Exchange::new(&client, "NOPE").quotes().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to get QuoteList (NOPE): Invalid Exchange");
}
