use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// DNS resolution failure or refused connection.
    #[error("error connecting to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out: {source}")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any other transport fault (TLS, malformed response, body read).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ScraperError {
    /// Sorts a transport-level `reqwest::Error` into the timeout, connection,
    /// or catch-all request variant.
    ///
    /// A connect timeout reports both `is_timeout` and `is_connect`; it is
    /// classified as a timeout.
    pub(crate) fn from_transport(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_owned();
        if source.is_timeout() {
            Self::Timeout { url, source }
        } else if source.is_connect() {
            Self::Connection { url, source }
        } else {
            Self::Request { url, source }
        }
    }
}
