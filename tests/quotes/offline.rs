use crate::common::{client, mock_login, mock_op, setup_server};
use chrono::NaiveDate;
use eoddata_rs::{EodError, Exchange, Period};
use httpmock::Method::POST;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn quote_list_for_symbols_is_keyed_by_symbol() {
    let server = setup_server();
    let _login = mock_login(&server);
    let quotes = server.mock(|when, then| {
        when.method(POST)
            .path("/QuoteList2")
            .form_urlencoded_tuple("Token", "TOKEN-1")
            .form_urlencoded_tuple("Exchange", "NASDAQ")
            .form_urlencoded_tuple("Symbols", "AAPL,GOOG");
        then.status(200)
            .body(crate::common::fixture("QuoteList2", "NASDAQ_AAPL_GOOG", "xml"));
    });

    let client = client(&server);
    let map = Exchange::new(&client, "NASDAQ")
        .quotes_for(["AAPL", "GOOG"])
        .await
        .unwrap();

    quotes.assert();
    assert_eq!(map.keys().collect::<Vec<_>>(), ["AAPL", "GOOG"]);

    let goog = &map["GOOG"];
    assert_eq!(goog.close, Some(dec("575.06")));
    assert_eq!(goog.volume, Some(1_920_700));
    assert_eq!(goog.change, Some(dec("-12.93")));
    assert_eq!(
        goog.date_time.map(|d| d.date()),
        NaiveDate::from_ymd_opt(2014, 9, 25)
    );
    assert_eq!(map["AAPL"].description.as_deref(), Some("Apple Inc"));
}

#[tokio::test]
async fn empty_symbol_list_is_rejected_without_a_request() {
    let server = setup_server();
    let login = mock_login(&server);

    let client = client(&server);
    let err = Exchange::new(&client, "NASDAQ")
        .quotes_for(Vec::<String>::new())
        .await
        .unwrap_err();

    assert!(matches!(err, EodError::InvalidParams(_)), "got {err:?}");
    login.assert_calls(0);
}

#[tokio::test]
async fn quote_list_returns_every_symbol() {
    let server = setup_server();
    let _login = mock_login(&server);
    let quotes = mock_op(&server, "QuoteList", "NASDAQ");

    let client = client(&server);
    let map = Exchange::new(&client, "NASDAQ").quotes().await.unwrap();

    quotes.assert();
    assert_eq!(map.len(), 3);
    assert_eq!(map["MSFT"].close, Some(dec("46.04")));
}

#[tokio::test]
async fn intraday_list_groups_bars_per_symbol_in_order() {
    let server = setup_server();
    let _login = mock_login(&server);
    let quotes = server.mock(|when, then| {
        when.method(POST)
            .path("/QuoteListByDatePeriod")
            .form_urlencoded_tuple("QuoteDate", "20140923")
            .form_urlencoded_tuple("Period", "h");
        then.status(200).body(crate::common::fixture(
            "QuoteListByDatePeriod",
            "NASDAQ_9_23_2014_h",
            "xml",
        ));
    });

    let client = client(&server);
    let grouped = Exchange::new(&client, "NASDAQ")
        .quotes_on_period(NaiveDate::from_ymd_opt(2014, 9, 23).unwrap(), Period::Hour)
        .await
        .unwrap();

    quotes.assert();
    assert_eq!(grouped["AAPL"].len(), 1);
    let goog: Vec<_> = grouped["GOOG"].iter().map(|q| q.close.unwrap()).collect();
    assert_eq!(goog, [dec("588.4"), dec("587.5")]);
}

#[tokio::test]
async fn top_gainers_keep_server_ranking() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _top = mock_op(&server, "Top10Gains", "NASDAQ");

    let client = client(&server);
    let top = Exchange::new(&client, "NASDAQ").top_gainers().await.unwrap();

    let syms: Vec<_> = top.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(syms, ["ZZZ", "AAA"]);
    assert_eq!(top[0].change_ratio(), Some(Decimal::ONE));
}
