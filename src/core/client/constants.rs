//! Centralized constants for default endpoint, timeouts and UA.

use std::time::Duration;

/// Identifies the crate to the service operators.
pub(crate) const USER_AGENT: &str = concat!("eoddata-rs/", env!("CARGO_PKG_VERSION"));

/// EODData SOAP/XML data service base (operation name is appended).
pub(crate) const DEFAULT_ENDPOINT: &str = "http://ws.eoddata.com/data.asmx/";

/// Overall per-request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How long a cached login token is reused before a fresh `Login` is issued.
pub(crate) const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30);

/// Environment variables read by `EodClientBuilder::from_env`.
pub(crate) const ENV_USERNAME: &str = "EODDATA_USERNAME";
pub(crate) const ENV_PASSWORD: &str = "EODDATA_PASSWORD";
pub(crate) const ENV_ENDPOINT: &str = "EODDATA_ENDPOINT";
