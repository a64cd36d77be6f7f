//! Fetch-and-normalize entry points.

use yahoo_chart_api::Client;

use crate::convert::{frame_from_chart, FrameOptions};
use crate::error::ExportError;
use crate::frame::PriceFrame;
use crate::normalize::normalize;
use crate::query::Query;
use crate::record::Record;

/// Runs one query against the chart API and reduces the answer to records.
pub struct Exporter {
    client: Client,
    multi_level: bool,
}

impl Exporter {
    /// Creates an exporter that lays the provider's answer out with
    /// `(field, symbol)` columns, as a multi-symbol download would.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            multi_level: true,
        }
    }

    /// Requests plain field-name columns instead.
    pub fn with_flat_columns(mut self, flat: bool) -> Self {
        self.multi_level = !flat;
        self
    }

    /// Fetches the daily series for the query as a date-indexed frame.
    pub async fn fetch_frame(&self, query: &Query) -> Result<PriceFrame, ExportError> {
        let chart = self
            .client
            .get_chart(query.symbol(), &query.to_chart_query())
            .await?;
        let frame = frame_from_chart(
            &chart,
            FrameOptions {
                adjusted: query.adjusted(),
                multi_level: self.multi_level,
                start: Some(query.start_date()),
                end: query.end_date(),
            },
        )?;
        tracing::debug!(
            "{}: {} rows since {}",
            query.symbol(),
            frame.len(),
            query.start_date()
        );
        Ok(frame)
    }

    /// Fetches the series and returns one `{Date, Close}` record per trading day.
    pub async fn export(&self, query: &Query) -> Result<Vec<Record>, ExportError> {
        let frame = self.fetch_frame(query).await?;
        normalize(&frame)
    }
}

/// Exports adjusted daily closes for `symbol` from `start_date` to today using
/// the production endpoint.
pub async fn export(symbol: &str, start_date: &str) -> Result<Vec<Record>, ExportError> {
    let query = Query::new(symbol, start_date)?;
    Exporter::new(Client::new()).export(&query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_input_fails_before_any_request() {
        let err = export("", "2020-01-01").await.unwrap_err();
        assert!(matches!(err, ExportError::InvalidInput(_)));

        let err = export("AAPL", "2020-1-1x").await.unwrap_err();
        assert!(matches!(err, ExportError::InvalidInput(_)));
    }
}
