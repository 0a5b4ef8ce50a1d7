//! Blocking HTTP GET/POST over a shared async client.
//!
//! Requests run on a shared tokio runtime so callers keep a plain
//! synchronous interface. There are no retries: a failed request is
//! reported once and the caller decides how to degrade.

use std::sync::LazyLock;
use std::time::Duration;

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error types for HTTP operations
#[derive(Debug)]
pub enum HttpError {
    /// Transport or status error with optional status code
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Response body could not be read as text
    Body(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Body(message) => write!(f, "body error: {message}"),
        }
    }
}

impl std::error::Error for HttpError {}

impl HttpError {
    /// Create HTTP error from reqwest error
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

/// Shared async HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("affilscan/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
});

/// Shared tokio runtime for HTTP operations.
///
/// A pipeline run issues at most two requests in sequence, so a
/// current-thread runtime is enough.
static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// HTTP GET with query parameters, returning the response body as text.
///
/// Non-2xx responses are errors.
pub fn get_text(url: &str, params: &[(&str, String)]) -> Result<String, HttpError> {
    send_text(SHARED_CLIENT.get(url).query(params))
}

/// HTTP POST with a form-encoded body, returning the response body as text.
///
/// For parameter sets too large for a query string. Non-2xx responses are errors.
pub fn post_form_text(url: &str, params: &[(&str, String)]) -> Result<String, HttpError> {
    send_text(SHARED_CLIENT.post(url).form(params))
}

fn send_text(request: reqwest::RequestBuilder) -> Result<String, HttpError> {
    SHARED_RUNTIME.block_on(async {
        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| HttpError::from_reqwest(&e))?;

        response
            .text()
            .await
            .map_err(|e| HttpError::Body(e.to_string()))
    })
}
