//! Error types for the chart API client.

/// Errors that can occur when requesting chart data.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The base URL or symbol could not be turned into a request URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with an error payload in `chart.error`.
    #[error("Provider error ({code}): {description}")]
    Provider { code: String, description: String },
    /// The body was not a chart response we understand.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
