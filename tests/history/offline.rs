use crate::common::{client, fixture, mock_login, setup_server};
use chrono::NaiveDate;
use eoddata_rs::{EodError, HistoryBuilder, Period, Ticker};
use httpmock::Method::POST;

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, m, day).unwrap()
}

#[tokio::test]
async fn daily_history_since_start() {
    let server = setup_server();
    let _login = mock_login(&server);
    let hist = server.mock(|when, then| {
        when.method(POST)
            .path("/SymbolHistory")
            .form_urlencoded_tuple("Exchange", "NASDAQ")
            .form_urlencoded_tuple("Symbol", "GOOG")
            .form_urlencoded_tuple("StartDate", "20140915");
        then.status(200)
            .body(fixture("SymbolHistory", "NASDAQ_GOOG_9_15_2014", "xml"));
    });

    let client = client(&server);
    let bars = Ticker::new(&client, "NASDAQ", "GOOG")
        .history(d(9, 15))
        .await
        .unwrap();

    hist.assert();
    assert_eq!(bars.len(), 3);
    let days: Vec<_> = bars.iter().map(|q| q.date_time.unwrap().date()).collect();
    assert_eq!(days, [d(9, 15), d(9, 16), d(9, 17)]);
    assert!(bars.iter().all(|q| q.symbol == "GOOG"));
}

#[tokio::test]
async fn empty_history_is_not_an_error() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _hist = server.mock(|when, then| {
        when.method(POST).path("/SymbolHistory");
        then.status(200).body(fixture("SymbolHistory", "empty", "xml"));
    });

    let client = client(&server);
    let bars = Ticker::new(&client, "NASDAQ", "GOOG")
        .history(d(9, 15))
        .await
        .unwrap();
    assert!(bars.is_empty());
}

#[tokio::test]
async fn service_failure_names_the_request() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _hist = server.mock(|when, then| {
        when.method(POST).path("/SymbolHistory");
        then.status(200)
            .body(fixture("SymbolHistory", "invalid_symbol", "xml"));
    });

    let client = client(&server);
    let err = Ticker::new(&client, "NASDAQ", "GOOG")
        .history(d(9, 15))
        .await
        .unwrap_err();

    match &err {
        EodError::Api { operation, context, message } => {
            assert_eq!(*operation, "SymbolHistory");
            assert_eq!(context, "NASDAQ:GOOG, 9/15/2014-");
            assert_eq!(message, "Invalid Symbol");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn builder_range_uses_the_date_range_operation() {
    let server = setup_server();
    let _login = mock_login(&server);
    let range = server.mock(|when, then| {
        when.method(POST)
            .path("/SymbolHistoryPeriodByDateRange")
            .form_urlencoded_tuple("StartDate", "20140915")
            .form_urlencoded_tuple("EndDate", "20140917")
            .form_urlencoded_tuple("Period", "d");
        then.status(200)
            .body(fixture("SymbolHistory", "NASDAQ_GOOG_9_15_2014", "xml"));
    });

    let client = client(&server);
    let bars = HistoryBuilder::new(&client, "NASDAQ", "GOOG")
        .start(d(9, 15))
        .end(d(9, 17))
        .fetch()
        .await
        .unwrap();

    range.assert();
    assert_eq!(bars.len(), 3);
}

#[tokio::test]
async fn builder_single_date_uses_the_period_operation() {
    let server = setup_server();
    let _login = mock_login(&server);
    let period = server.mock(|when, then| {
        when.method(POST)
            .path("/SymbolHistoryPeriod")
            .form_urlencoded_tuple("Date", "20140923")
            .form_urlencoded_tuple("Period", "h");
        then.status(200).body(fixture("SymbolHistory", "empty", "xml"));
    });

    let client = client(&server);
    let bars = Ticker::new(&client, "NASDAQ", "GOOG")
        .history_period(d(9, 23), Period::Hour)
        .await
        .unwrap();

    period.assert();
    assert!(bars.is_empty());
}

#[tokio::test]
async fn reversed_range_is_rejected_before_login() {
    let server = setup_server();
    let login = mock_login(&server);

    let client = client(&server);
    let err = Ticker::new(&client, "NASDAQ", "GOOG")
        .history_range(d(9, 24), d(9, 15), Period::Day)
        .await
        .unwrap_err();

    assert!(matches!(err, EodError::InvalidParams(_)), "got {err:?}");
    login.assert_calls(0);
}
