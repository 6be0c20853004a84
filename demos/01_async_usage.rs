use chrono::NaiveDate;
use eoddata_rs::{EodClientBuilder, Exchange, Period, Ticker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // EODDATA_USERNAME / EODDATA_PASSWORD must be set.
    let client = EodClientBuilder::from_env()?.max_in_flight(4).build()?;

    println!("--- Reference data ---");
    let countries = client.countries().await?;
    println!("{} countries, e.g. US = {:?}", countries.len(), countries.get("US"));
    let exchanges = client.exchanges().await?;
    println!("{} exchanges", exchanges.len());
    println!();

    println!("--- NASDAQ ---");
    let nasdaq = Exchange::new(&client, "NASDAQ");
    let quotes = nasdaq.quotes_for(["AAPL", "GOOG"]).await?;
    for (symbol, q) in &quotes {
        println!(
            "{symbol}: close {:?}, change {:?}, volume {:?}",
            q.close, q.change, q.volume
        );
    }
    for q in nasdaq.top_gainers().await?.iter().take(3) {
        println!("gainer {} {:?}", q.symbol, q.change_ratio());
    }
    println!();

    println!("--- GOOG ---");
    let goog = Ticker::new(&client, "NASDAQ", "GOOG");
    let snap = goog.snapshot().await?;
    println!("{} ({:?}) last {:?}", snap.symbol.code, snap.symbol.name, snap.quote.close);

    let start = NaiveDate::from_ymd_opt(2014, 9, 15).ok_or("bad date")?;
    let end = NaiveDate::from_ymd_opt(2014, 9, 24).ok_or("bad date")?;
    let daily = goog.history(start).await?;
    println!("{} daily bars since {start}", daily.len());

    let hourly = goog.history_range(start, end, Period::Hour).await?;
    println!("{} hourly bars {start}..={end}", hourly.len());

    let splits = goog.splits().await?;
    println!("{} splits", splits.len());

    Ok(())
}
