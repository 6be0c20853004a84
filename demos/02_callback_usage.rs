use eoddata_rs::{EodClientBuilder, Exchange, callback::spawn_with_callback};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = EodClientBuilder::from_env()?.build()?;
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let mut handles = Vec::new();
    for code in ["NASDAQ", "NYSE", "AMEX"] {
        let exchange = Exchange::new(&client, code);
        let tx = tx.clone();
        handles.push(spawn_with_callback(
            async move { exchange.symbol_names().await },
            move |res| {
                let line = match res {
                    Ok(names) => format!("{code}: {} symbols", names.len()),
                    Err(e) => format!("{code}: {e}"),
                };
                let _ = tx.send(line);
            },
        ));
    }
    drop(tx);

    while let Some(line) = rx.recv().await {
        println!("{line}");
    }
    for h in handles {
        h.await?;
    }
    Ok(())
}
