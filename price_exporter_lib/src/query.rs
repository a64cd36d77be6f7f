use chrono::NaiveDate;
use yahoo_chart_api::ChartQuery;

use crate::error::ExportError;
use crate::validation::{validate_date, validate_symbol};

/// One export request, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    symbol: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    adjusted: bool,
}

impl Query {
    /// Validates a symbol and a `YYYY-MM-DD` start date. The range runs to
    /// the present and closes are split/dividend adjusted.
    pub fn new(symbol: &str, start_date: &str) -> Result<Self, ExportError> {
        Ok(Self {
            symbol: validate_symbol(symbol)?,
            start_date: validate_date(start_date)?,
            end_date: None,
            adjusted: true,
        })
    }

    /// Sets an inclusive end date, which must not precede the start date.
    pub fn with_end_date(mut self, end_date: &str) -> Result<Self, ExportError> {
        let end = validate_date(end_date)?;
        if end < self.start_date {
            return Err(ExportError::InvalidInput(format!(
                "end date {} is before start date {}",
                end, self.start_date
            )));
        }
        self.end_date = Some(end);
        Ok(self)
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn adjusted(&self) -> bool {
        self.adjusted
    }

    pub(crate) fn to_chart_query(&self) -> ChartQuery {
        let query = ChartQuery::new(self.start_date).with_adjusted_close(self.adjusted);
        match self.end_date {
            Some(end) => query.with_end(end),
            None => query,
        }
    }
}
