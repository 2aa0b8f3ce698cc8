//! Document retrieval
//!
//! The retrieval collaborator: resolves an absolute http(s) URL into an
//! ordered sequence of raw body lines, or a typed failure. The analyzer never
//! sees a partial document; the body is fully materialized here, so the line
//! sequence handed over is finite.
//!
//! Every failure mode (bad URL syntax, unsupported scheme, non-2xx status,
//! network or timeout error) is distinguished in [FetchError] for callers
//! that want diagnostics; the CLI collapses all of them into the single
//! retrieval-error outcome.

use std::fmt;
use std::time::Duration;

use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str = concat!("deepline/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur while retrieving the document
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    InvalidUrl(String),
    UnsupportedScheme(String),
    BadStatus(u16),
    Network(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            FetchError::UnsupportedScheme(scheme) => {
                write!(f, "Unsupported URL scheme: {}", scheme)
            }
            FetchError::BadStatus(status) => write!(f, "Non-success status: {}", status),
            FetchError::Network(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Validate that the URL is absolute with an http(s) scheme.
///
/// Scheme comparison is case-insensitive; `url` normalizes schemes to
/// lowercase during parsing. Relative URLs fail to parse and are rejected.
pub fn validate_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

/// Fetch the document at `raw_url` and return its body as raw lines.
///
/// Follows redirects, applies connect and request timeouts, and requires a
/// 2xx response. Blank lines are kept; the analyzer skips them itself.
pub async fn fetch_lines(raw_url: &str) -> Result<Vec<String>, FetchError> {
    let url = validate_url(raw_url)?;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(body.lines().map(str::to_owned).collect())
}
