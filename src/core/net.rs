use crate::core::Operation;

/// Reads a response body as text.
///
/// Under `test-mode` with `EOD_RECORD=1` the body is also written to
/// `{operation}_{key}.xml` in the fixture directory.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    operation: Operation,
    key: &str,
) -> Result<String, reqwest::Error> {
    let body = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        use crate::core::fixtures::{record_fixture, recording_enabled};
        if recording_enabled()
            && let Err(e) = record_fixture(operation, key, &body)
        {
            eprintln!("EOD_RECORD: failed to write fixture for {operation} ({key}): {e}");
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = (operation, key);

    Ok(body)
}
