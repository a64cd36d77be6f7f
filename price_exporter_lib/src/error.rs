//! Error types for the library layer.

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding input validation, schema, and serialization failures.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An error from the underlying chart API client.
    #[error("API error: {0}")]
    Api(#[from] yahoo_chart_api::Error),
    /// The provider's table has no usable `Close` column or is malformed.
    #[error("Unrecognized response schema: {0}")]
    UnrecognizedSchema(String),
    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
