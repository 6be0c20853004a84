//! Public client surface + builder.
//! Internals are split into `auth` (login token), `request` (operation dispatch)
//! and `constants` (UA + defaults).

mod auth;
mod constants;
mod request;

use crate::core::EodError;
use constants::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_TOKEN_TTL, ENV_ENDPOINT, ENV_PASSWORD,
    ENV_USERNAME, USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock, Semaphore};
use url::Url;

#[derive(Debug, Default)]
struct TokenState {
    token: Option<String>,
    acquired_at: Option<Instant>,
    /// Bumped after every `Login` attempt, successful or not.
    attempts: u64,
    /// Outcome of the latest attempt when it failed; replayed to callers that queued
    /// behind it.
    failure: Option<EodError>,
}

#[derive(Clone)]
struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An async client for the EODData web service.
///
/// The client owns its HTTP connection pool and its login token. Cloning is cheap and
/// every clone shares the same token, so a single `Login` serves all of them.
///
/// # Example
///
/// ```no_run
/// # use eoddata_rs::EodClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), eoddata_rs::EodError> {
/// let client = EodClient::builder()
///     .credentials("user", "secret")
///     .build()?;
///
/// let exchanges = client.exchanges().await?;
/// println!("{} exchanges", exchanges.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EodClient {
    http: Client,
    endpoint: Url,
    credentials: Option<Credentials>,

    token_cache: bool,
    token_ttl: Duration,
    state: Arc<RwLock<TokenState>>,
    token_fetch_lock: Arc<Mutex<()>>,

    in_flight: Option<Arc<Semaphore>>,
}

impl EodClient {
    /// Create a new builder.
    pub fn builder() -> EodClientBuilder {
        EodClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether login tokens are cached between calls.
    pub fn token_cache_enabled(&self) -> bool {
        self.token_cache
    }

    /// The configured token expiry interval.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EodClientBuilder {
    endpoint: Option<Url>,
    user_agent: Option<String>,
    username: Option<String>,
    password: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,

    token_cache: Option<bool>,
    token_ttl: Option<Duration>,
    max_in_flight: Option<usize>,
}

impl EodClientBuilder {
    /// Seed a builder from `EODDATA_USERNAME`, `EODDATA_PASSWORD` and `EODDATA_ENDPOINT`.
    ///
    /// Unset variables are left at their defaults; explicit setters called afterwards win.
    ///
    /// # Errors
    ///
    /// Returns an error if `EODDATA_ENDPOINT` is set but is not a valid URL.
    pub fn from_env() -> Result<Self, EodError> {
        let mut b = Self::default();
        if let Ok(user) = std::env::var(ENV_USERNAME) {
            b.username = Some(user);
        }
        if let Ok(pass) = std::env::var(ENV_PASSWORD) {
            b.password = Some(pass);
        }
        if let Ok(ep) = std::env::var(ENV_ENDPOINT) {
            b.endpoint = Some(Url::parse(&ep)?);
        }
        Ok(b)
    }

    /// Override the service base (e.g., `http://ws.eoddata.com/data.asmx/`).
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Account credentials sent to the `Login` operation.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a per-request timeout (overall). Default: 30s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Reuse login tokens between calls. Default: enabled.
    ///
    /// When disabled every operation performs its own `Login` first.
    pub fn token_cache(mut self, enabled: bool) -> Self {
        self.token_cache = Some(enabled);
        self
    }

    /// How long a cached token stays valid. Default: 30s.
    pub fn token_ttl(mut self, dur: Duration) -> Self {
        self.token_ttl = Some(dur);
        self
    }

    /// Bound the number of operation requests in flight at once.
    ///
    /// `1` sends requests strictly one after another. Default: unbounded.
    pub fn max_in_flight(mut self, n: usize) -> Self {
        self.max_in_flight = Some(n);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint cannot be parsed, `max_in_flight` is zero,
    /// or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<EodClient, EodError> {
        let mut endpoint = match self.endpoint {
            Some(u) => u,
            None => Url::parse(DEFAULT_ENDPOINT)?,
        };
        // `Url::join` replaces the last segment unless the base ends in '/'.
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        if self.max_in_flight == Some(0) {
            return Err(EodError::InvalidParams(
                "max_in_flight must be at least 1".into(),
            ));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        let credentials = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Ok(EodClient {
            http,
            endpoint,
            credentials,
            token_cache: self.token_cache.unwrap_or(true),
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            state: Arc::new(RwLock::new(TokenState::default())),
            token_fetch_lock: Arc::new(Mutex::new(())),
            in_flight: self.max_in_flight.map(|n| Arc::new(Semaphore::new(n))),
        })
    }
}
