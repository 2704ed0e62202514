use thiserror::Error;

/// Unified failure type for every public operation.
///
/// All failure sources (transport, HTTP status, schema mismatch, signing)
/// are classified into one of these variants at the call site that produced
/// them; no raw `reqwest` or `serde_json` errors cross the API boundary.
#[derive(Error, Debug, Clone)]
pub enum ExchangeError {
    #[error("network error: {0}")]
    NetworkError(String),

    #[error("API error: {code} - {message}")]
    ApiError { code: i32, message: String },

    #[error("failed to decode response: {0}")]
    DeserializationError(String),

    #[error("authentication error: {0}")]
    AuthError(String),

    /// A response was expected but nothing was delivered.
    #[error("no data")]
    NoData,

    /// Explicit "nothing wrong" sentinel for default/initial states.
    #[error("no error")]
    NoError,

    #[error("{0}")]
    Other(String),
}
