use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EodError {
    /// An error occurred during an HTTP request (connection failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Failed to get {operation}{}: status {status} at {url}", context_suffix(.context))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The remote operation name.
        operation: &'static str,
        /// The identifying request parameters; empty for operations that take none.
        context: String,
    },

    /// The response body was not well-formed XML or did not match the expected shape.
    #[error("Malformed XML response: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The service answered but without the operation's data node.
    #[error("Failed to get {operation}{}: {message}", context_suffix(.context))]
    Api {
        /// The remote operation name, e.g. `QuoteList`.
        operation: &'static str,
        /// The identifying request parameters, e.g. `NASDAQ:GOOG, 9/15/2014-`.
        /// Empty for operations that take none.
        context: String,
        /// The server-provided message.
        message: String,
    },

    /// Login failed or no credentials were configured.
    #[error("Failed to login: {0}")]
    Auth(String),

    /// Request parameters were rejected before anything was sent.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!(" ({context})")
    }
}

impl EodError {
    /// Whether this error is a request that exceeded the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// The HTTP status code, for [`EodError::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
