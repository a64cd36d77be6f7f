//! Reduces a [`PriceFrame`] to `{Date, Close}` records.
//!
//! Each column layout has its own extraction function. A frame without a
//! column literally named `Close` is rejected rather than guessed at.

use crate::convert::CLOSE;
use crate::error::ExportError;
use crate::frame::{PriceFrame, ResponseShape};
use crate::record::Record;

/// Pairs every trading date with its closing price, in row order.
pub fn normalize(frame: &PriceFrame) -> Result<Vec<Record>, ExportError> {
    match frame.shape() {
        ResponseShape::Flat(names) => extract_flat(frame, names),
        ResponseShape::TwoLevel(keys) => extract_two_level(frame, keys),
    }
}

fn extract_flat(frame: &PriceFrame, names: &[String]) -> Result<Vec<Record>, ExportError> {
    let idx = names.iter().position(|name| name == CLOSE).ok_or_else(|| {
        ExportError::UnrecognizedSchema(format!(
            "no '{}' column in [{}]",
            CLOSE,
            names.join(", ")
        ))
    })?;
    pair_with_dates(frame, idx)
}

/// Matches on the field level only, so the symbol label never matters. The
/// first `Close` wins if several symbols are present.
fn extract_two_level(
    frame: &PriceFrame,
    keys: &[(String, String)],
) -> Result<Vec<Record>, ExportError> {
    let idx = keys
        .iter()
        .position(|(field, _)| field == CLOSE)
        .ok_or_else(|| {
            let labels: Vec<String> = keys
                .iter()
                .map(|(field, symbol)| format!("({}, {})", field, symbol))
                .collect();
            ExportError::UnrecognizedSchema(format!(
                "no '{}' field in [{}]",
                CLOSE,
                labels.join(", ")
            ))
        })?;
    pair_with_dates(frame, idx)
}

fn pair_with_dates(frame: &PriceFrame, idx: usize) -> Result<Vec<Record>, ExportError> {
    let closes = frame.column(idx).ok_or_else(|| {
        ExportError::UnrecognizedSchema(format!("column {} out of range", idx))
    })?;
    Ok(frame
        .dates()
        .iter()
        .zip(closes)
        .map(|(&date, &close)| Record::new(date, close))
        .collect())
}
