#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    APIKeyNotFound(#[from] std::env::VarError),
    /// Transport-level failure: DNS, connection refused, TLS, timeout.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a status outside the success range.
    #[error("HTTP status {status}: {text}")]
    HttpStatus { status: u16, text: String },
    /// The response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Deserialization(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::Deserialization(error.to_string())
        } else {
            Error::Network(error.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
