//! Test/recording helpers for persisting raw XML responses as fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::Operation;

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("EOD_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// `NASDAQ:GOOG, 9/15/2014-` -> `NASDAQ_GOOG_9_15_2014`
pub(crate) fn fixture_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "all".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether `EOD_RECORD=1` asks for responses to be saved.
pub(crate) fn recording_enabled() -> bool {
    env::var("EOD_RECORD").ok().as_deref() == Some("1")
}

fn fixture_path(dir: &Path, operation: Operation, key: &str) -> PathBuf {
    dir.join(format!("{operation}_{}.xml", fixture_key(key)))
}

/// Writes `body` to `{operation}_{key}.xml` under [`get_fixture_dir`].
pub(crate) fn record_fixture(
    operation: Operation,
    key: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    let dir = get_fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = fixture_path(&dir, operation, key);

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    if env::var("EOD_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("EOD_RECORD: wrote fixture to {}", path.display());
    }
    Ok(path)
}
