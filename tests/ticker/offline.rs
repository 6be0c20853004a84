use crate::common::{client, mock_login, mock_op, setup_server};
use eoddata_rs::Ticker;

#[tokio::test]
async fn snapshot_combines_details_and_quote() {
    let server = setup_server();
    let login = mock_login(&server);
    let symbol = mock_op(&server, "SymbolGet", "NASDAQ_GOOG");
    let quote = mock_op(&server, "QuoteGet", "NASDAQ_GOOG");

    let client = client(&server);
    let snap = Ticker::new(&client, "NASDAQ", "GOOG").snapshot().await.unwrap();

    login.assert_calls(1);
    symbol.assert();
    quote.assert();
    assert_eq!(snap.symbol.code, "GOOG");
    assert_eq!(snap.symbol.long_name.as_deref(), Some("Google Inc Class C"));
    assert_eq!(snap.quote.symbol, "GOOG");
    assert!(snap.quote.close.is_some());
}

#[tokio::test]
async fn no_splits_is_an_empty_list() {
    let server = setup_server();
    let _login = mock_login(&server);
    let splits = mock_op(&server, "SplitListBySymbol", "none");

    let client = client(&server);
    let got = Ticker::new(&client, "NASDAQ", "MSFT").splits().await.unwrap();

    splits.assert();
    assert!(got.is_empty());
}
