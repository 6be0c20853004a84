//! Completion-callback adapter over the async operations.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::core::EodError;

/// Drives `future` on the current tokio runtime and hands its result to `callback`.
///
/// This is the callback-style entry point for any operation in the crate. The returned
/// handle completes after `callback` has run; dropping it does not cancel the request.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
///
/// # Example
///
/// ```no_run
/// # use eoddata_rs::{EodClient, Exchange, callback::spawn_with_callback};
/// # #[tokio::main]
/// # async fn main() {
/// let client = EodClient::builder().credentials("user", "secret").build().unwrap();
/// let nasdaq = Exchange::new(&client, "NASDAQ");
///
/// let done = spawn_with_callback(async move { nasdaq.quotes().await }, |res| match res {
///     Ok(quotes) => println!("{} quotes", quotes.len()),
///     Err(e) => eprintln!("{e}"),
/// });
/// done.await.unwrap();
/// # }
/// ```
pub fn spawn_with_callback<T, Fut, F>(future: Fut, callback: F) -> JoinHandle<()>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T, EodError>> + Send + 'static,
    F: FnOnce(Result<T, EodError>) + Send + 'static,
{
    tokio::spawn(async move { callback(future.await) })
}
