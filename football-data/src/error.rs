use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Client could not be constructed (missing token, invalid URL, TLS backend failure)
    #[error("Failed to build football-data client: {0}")]
    Builder(String),
    /// Connection or transport level failure
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Request did not complete within the configured timeout
    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },
    /// API responded with a non-success status code
    #[error("Request to {url} failed with status {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },
    /// Response body is missing required fields or is not valid JSON
    #[error("Malformed response payload from {url}: {message}")]
    MalformedPayload { url: String, message: String },
}

impl Error {
    /// HTTP status code of the failed response, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::ReqwestError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure happened before any response was received
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::ReqwestError(err) => err.status().is_none(),
            _ => false,
        }
    }
}
