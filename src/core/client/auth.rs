//! Login token acquisition and caching.

use crate::core::{EodError, Operation, net, wire::LoginResponse};

impl super::EodClient {
    /// Returns a valid login token, logging in first if needed.
    ///
    /// With token caching enabled the cached token is reused until it is older than the
    /// configured TTL; concurrent callers that find it stale share a single `Login` and
    /// its outcome, including a failure.
    /// With caching disabled every call performs a fresh `Login`.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::Auth`] if no credentials are configured or the server refuses
    /// the login, and the usual transport/status/XML errors otherwise.
    pub async fn token(&self) -> Result<String, EodError> {
        if !self.token_cache {
            return self.fetch_token().await;
        }

        // Fast path: a fresh token under the read lock.
        let seen = {
            let state = self.state.read().await;
            if let Some(token) = self.fresh_token(&state) {
                return Ok(token);
            }
            state.attempts
        };

        // Slow path: only one task refreshes.
        let _guard = self.token_fetch_lock.lock().await;

        {
            let state = self.state.read().await;
            if let Some(token) = self.fresh_token(&state) {
                return Ok(token);
            }
            // A refresh finished while this task waited; it shares that outcome.
            if state.attempts != seen
                && let Some(failure) = &state.failure
            {
                return Err(replay(failure));
            }
        }

        let result = self.fetch_token().await;
        self.record_attempt(&result).await;
        result
    }

    /// Performs a `Login` unconditionally and, if caching is enabled, replaces the
    /// cached token.
    ///
    /// # Errors
    ///
    /// Same as [`EodClient::token`](super::EodClient::token).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn login(&self) -> Result<String, EodError> {
        if !self.token_cache {
            return self.fetch_token().await;
        }
        let _guard = self.token_fetch_lock.lock().await;
        let result = self.fetch_token().await;
        self.record_attempt(&result).await;
        result
    }

    /// Drops the cached token so the next operation logs in again.
    pub async fn invalidate_token(&self) {
        let mut state = self.state.write().await;
        state.token = None;
        state.acquired_at = None;
        state.failure = None;
    }

    fn fresh_token(&self, state: &super::TokenState) -> Option<String> {
        match (&state.token, state.acquired_at) {
            (Some(token), Some(at)) if at.elapsed() < self.token_ttl => Some(token.clone()),
            _ => None,
        }
    }

    /// Called with the refresh lock held.
    async fn record_attempt(&self, result: &Result<String, EodError>) {
        let mut state = self.state.write().await;
        state.attempts = state.attempts.wrapping_add(1);
        match result {
            Ok(token) => {
                state.token = Some(token.clone());
                state.acquired_at = Some(std::time::Instant::now());
                state.failure = None;
            }
            Err(e) => {
                state.token = None;
                state.acquired_at = None;
                state.failure = Some(replay(e));
            }
        }
    }

    async fn fetch_token(&self) -> Result<String, EodError> {
        let creds = self
            .credentials
            .as_ref()
            .ok_or_else(|| EodError::Auth("no credentials configured".into()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(username = %creds.username, "logging in");

        let url = self.endpoint.join(Operation::Login.as_str())?;
        let resp = self
            .http
            .post(url.clone())
            .form(&[
                ("Username", creds.username.as_str()),
                ("Password", creds.password.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EodError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                operation: Operation::Login.as_str(),
                context: String::new(),
            });
        }

        let body = net::get_text(resp, Operation::Login, "token").await?;
        let login: LoginResponse = quick_xml::de::from_str(&body)?;

        match login.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("login succeeded");
                Ok(token)
            }
            None => Err(EodError::Auth(
                login
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "login response carried no token".into()),
            )),
        }
    }
}

/// A copy of a login failure for the callers that waited on it. Transport and XML
/// errors hold non-cloneable sources and are replayed as [`EodError::Auth`] with their
/// message.
fn replay(err: &EodError) -> EodError {
    match err {
        EodError::Auth(m) => EodError::Auth(m.clone()),
        EodError::InvalidParams(m) => EodError::InvalidParams(m.clone()),
        EodError::Url(e) => EodError::Url(*e),
        EodError::Status {
            status,
            url,
            operation,
            context,
        } => EodError::Status {
            status: *status,
            url: url.clone(),
            operation: *operation,
            context: context.clone(),
        },
        EodError::Api {
            operation,
            context,
            message,
        } => EodError::Api {
            operation: *operation,
            context: context.clone(),
            message: message.clone(),
        },
        other => EodError::Auth(other.to_string()),
    }
}
