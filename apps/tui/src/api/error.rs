use thiserror::Error;

/// Errors surfaced by the analytics API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure: connect error, timeout, or an HTTP error
    /// status with no usable body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The body decoded as JSON but did not match the documented shape
    /// for the endpoint (missing or mistyped field).
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// A well-formed response carrying a business-level `error` field.
    /// The message is the server's text, rendered verbatim.
    #[error("{0}")]
    Domain(String),
}

impl ApiError {
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
