use chrono::NaiveDate;

use crate::error::ExportError;

/// Calendar date format accepted on input and emitted on output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trims surrounding whitespace and rejects an empty symbol. Anything else is
/// left for the provider to accept or reject.
pub fn validate_symbol(input: &str) -> Result<String, ExportError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExportError::InvalidInput(
            "symbol must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn validate_date(input: &str) -> Result<NaiveDate, ExportError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        ExportError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD",
            input
        ))
    })
}
