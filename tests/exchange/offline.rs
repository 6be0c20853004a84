use crate::common::{client, mock_login, mock_op, setup_server};
use chrono::NaiveDate;
use eoddata_rs::Exchange;

#[tokio::test]
async fn countries_are_keyed_by_code() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _countries = mock_op(&server, "CountryList", "all");

    let client = client(&server);
    let countries = client.countries().await.unwrap();

    assert_eq!(countries.len(), 3);
    assert_eq!(countries["US"], "United States");
}

#[tokio::test]
async fn exchange_splits_are_parsed() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _splits = mock_op(&server, "SplitListByExchange", "NASDAQ");

    let client = client(&server);
    let splits = Exchange::new(&client, "NASDAQ").splits().await.unwrap();

    assert_eq!(splits.len(), 2);
    let aapl = &splits[0];
    assert_eq!(aapl.symbol, "AAPL");
    assert_eq!(aapl.ratio, "7-1");
    assert_eq!(aapl.numerator, Some(7));
    assert_eq!(aapl.denominator, Some(1));
    assert_eq!(
        aapl.date_time.map(|d| d.date()),
        NaiveDate::from_ymd_opt(2014, 6, 9)
    );
}

#[tokio::test]
async fn symbol_names_map_code_to_name() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _symbols = mock_op(&server, "SymbolList2", "NASDAQ");

    let client = client(&server);
    let names = Exchange::new(&client, "NASDAQ").symbol_names().await.unwrap();

    assert_eq!(names.get("GOOG").map(String::as_str), Some("Google Inc"));
    assert_eq!(names.len(), 2);
}

#[tokio::test]
async fn fundamentals_are_keyed_by_symbol() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _fundamentals = mock_op(&server, "FundamentalList", "NASDAQ");

    let client = client(&server);
    let all = Exchange::new(&client, "NASDAQ").fundamentals().await.unwrap();

    let aapl = &all["AAPL"];
    assert_eq!(aapl.sector.as_deref(), Some("Technology"));
    assert_eq!(aapl.shares, Some(5_987_867_000));
    assert_eq!(aapl.pe, Some(15.3));
    assert_eq!(aapl.dividend_yield, Some(1.92));
}

#[tokio::test]
async fn exchange_details_are_typed() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _exchange = mock_op(&server, "ExchangeGet", "NASDAQ");

    let client = client(&server);
    let info = Exchange::new(&client, "NASDAQ").info().await.unwrap();

    assert_eq!(info.code, "NASDAQ");
    assert_eq!(info.currency.as_deref(), Some("USD"));
    assert_eq!(info.advances, Some(812));
    assert_eq!(info.is_intraday, Some(true));
    assert_eq!(info.suffix, None);
}

#[tokio::test]
async fn data_formats_are_keyed_by_code() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _formats = mock_op(&server, "DataFormats", "all");

    let client = client(&server);
    let formats = client.data_formats().await.unwrap();

    assert_eq!(formats.len(), 2);
    assert_eq!(formats["CSV"].extension.as_deref(), Some("csv"));
    assert_eq!(formats["CSV"].include_header_row, Some(true));
    assert_eq!(formats["MS"].header, None);
}

#[tokio::test]
async fn technicals_tolerate_blank_statistics() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _technicals = mock_op(&server, "TechnicalList", "NASDAQ");

    let client = client(&server);
    let all = Exchange::new(&client, "NASDAQ").technicals().await.unwrap();

    let goog = &all["GOOG"];
    assert_eq!(goog.ma20, Some(583.1));
    assert_eq!(goog.rsi14, Some(41.5));
    assert_eq!(goog.volatility, None);
    assert_eq!(goog.liquidity, None);
}

#[tokio::test]
async fn symbol_changes_keep_document_order() {
    let server = setup_server();
    let _login = mock_login(&server);
    let _changes = mock_op(&server, "SymbolChangesByExchange", "NASDAQ");

    let client = client(&server);
    let changes = Exchange::new(&client, "NASDAQ").symbol_changes().await.unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_symbol, "GOOG");
    assert_eq!(changes[0].new_symbol, "GOOGL");
    assert_eq!(changes[0].new_exchange.as_deref(), Some("NASDAQ"));
}

#[tokio::test]
async fn compact_quotes_for_a_date() {
    let server = setup_server();
    let _login = mock_login(&server);
    let quotes = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/QuoteListByDate2")
            .form_urlencoded_tuple("QuoteDate", "20140923");
        then.status(200).body(crate::common::fixture(
            "QuoteListByDate2",
            "NASDAQ_9_23_2014",
            "xml",
        ));
    });

    let client = client(&server);
    let map = Exchange::new(&client, "NASDAQ")
        .compact_quotes_on(NaiveDate::from_ymd_opt(2014, 9, 23).unwrap())
        .await
        .unwrap();

    quotes.assert();
    assert_eq!(map["AAPL"].volume, Some(63_402_200));
    assert_eq!(map["GOOG"].close.map(|c| c.to_string()).as_deref(), Some("581.13"));
}
