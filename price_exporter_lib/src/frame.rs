//! Date-indexed price table handed over by the provider layer.

use chrono::NaiveDate;

use crate::error::ExportError;

/// Column index of a [`PriceFrame`].
///
/// Single-symbol responses carry plain field names. Multi-symbol downloads
/// label every column with a `(field, symbol)` pair, and some providers use
/// that layout even when only one symbol was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    Flat(Vec<String>),
    TwoLevel(Vec<(String, String)>),
}

impl ResponseShape {
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(names) => names.len(),
            Self::TwoLevel(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field names in column order, without the symbol level.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::Flat(names) => names.iter().map(String::as_str).collect(),
            Self::TwoLevel(keys) => keys.iter().map(|(field, _)| field.as_str()).collect(),
        }
    }
}

/// Daily price fields keyed by trading date. Every column has exactly one
/// entry per date and rows keep the provider's order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFrame {
    dates: Vec<NaiveDate>,
    shape: ResponseShape,
    columns: Vec<Vec<Option<f64>>>,
}

impl PriceFrame {
    pub fn new(
        dates: Vec<NaiveDate>,
        shape: ResponseShape,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, ExportError> {
        if shape.len() != columns.len() {
            return Err(ExportError::UnrecognizedSchema(format!(
                "{} column labels for {} columns",
                shape.len(),
                columns.len()
            )));
        }
        if let Some((idx, col)) = columns
            .iter()
            .enumerate()
            .find(|(_, col)| col.len() != dates.len())
        {
            return Err(ExportError::UnrecognizedSchema(format!(
                "column '{}' has {} values for {} dates",
                shape.fields()[idx],
                col.len(),
                dates.len()
            )));
        }
        Ok(Self {
            dates,
            shape,
            columns,
        })
    }

    /// Builds a frame with plain field-name columns.
    pub fn flat<S: Into<String>>(
        dates: Vec<NaiveDate>,
        columns: Vec<(S, Vec<Option<f64>>)>,
    ) -> Result<Self, ExportError> {
        let (names, values): (Vec<String>, Vec<_>) = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .unzip();
        Self::new(dates, ResponseShape::Flat(names), values)
    }

    /// Builds a frame with `(field, symbol)` columns.
    pub fn two_level<S: Into<String>>(
        dates: Vec<NaiveDate>,
        columns: Vec<((S, S), Vec<Option<f64>>)>,
    ) -> Result<Self, ExportError> {
        let (keys, values): (Vec<(String, String)>, Vec<_>) = columns
            .into_iter()
            .map(|((field, symbol), values)| ((field.into(), symbol.into()), values))
            .unzip();
        Self::new(dates, ResponseShape::TwoLevel(keys), values)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn shape(&self) -> &ResponseShape {
        &self.shape
    }

    pub fn column(&self, idx: usize) -> Option<&[Option<f64>]> {
        self.columns.get(idx).map(Vec::as_slice)
    }

    /// Number of rows (trading days).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
