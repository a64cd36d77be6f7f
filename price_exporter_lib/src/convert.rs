//! Turns a chart API result into a [`PriceFrame`].
//!
//! Timestamps mark the exchange's session open in UTC; shifting them by the
//! exchange's GMT offset recovers the local trading date. Rows outside the
//! requested trading dates or with no price at all are dropped, and a
//! repeated trading date keeps its first row.

use chrono::{DateTime, NaiveDate};
use yahoo_chart_api::types::ChartResult;

use crate::error::ExportError;
use crate::frame::{PriceFrame, ResponseShape};

pub const OPEN: &str = "Open";
pub const HIGH: &str = "High";
pub const LOW: &str = "Low";
pub const CLOSE: &str = "Close";
pub const ADJ_CLOSE: &str = "Adj Close";
pub const VOLUME: &str = "Volume";

/// How the chart result is laid out as a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOptions {
    /// Replace prices with their split/dividend adjusted values. When set,
    /// `Close` holds the adjusted close and no `Adj Close` column is emitted.
    pub adjusted: bool,
    /// Label columns with `(field, symbol)` pairs instead of plain names.
    pub multi_level: bool,
    /// First trading date to keep.
    pub start: Option<NaiveDate>,
    /// Last trading date to keep, inclusive.
    pub end: Option<NaiveDate>,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            adjusted: true,
            multi_level: true,
            start: None,
            end: None,
        }
    }
}

impl FrameOptions {
    fn in_range(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[derive(Debug, Clone, Copy)]
struct Bar {
    date: NaiveDate,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    adj_close: Option<f64>,
    volume: Option<f64>,
}

impl Bar {
    fn has_prices(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.adj_close]
            .iter()
            .any(Option::is_some)
    }

    /// Scales open/high/low by the adjustment ratio and swaps in the adjusted
    /// close.
    fn adjust(self) -> Self {
        let ratio = match (self.adj_close, self.close) {
            (Some(adj), Some(close)) if close != 0.0 => Some(adj / close),
            _ => None,
        };
        let scale = |v: Option<f64>| v.zip(ratio).map(|(v, r)| v * r);
        Self {
            open: scale(self.open),
            high: scale(self.high),
            low: scale(self.low),
            close: self.adj_close,
            ..self
        }
    }
}

/// Converts the provider's time series into a date-indexed frame.
pub fn frame_from_chart(
    chart: &ChartResult,
    options: FrameOptions,
) -> Result<PriceFrame, ExportError> {
    let n = chart.timestamp.len();
    let quote = chart.indicators.quote.first().cloned().unwrap_or_default();
    let adjclose = chart
        .indicators
        .adjclose
        .first()
        .map(|a| a.adjclose.as_slice())
        .unwrap_or(&[]);

    for (name, len) in [
        (OPEN, quote.open.len()),
        (HIGH, quote.high.len()),
        (LOW, quote.low.len()),
        (CLOSE, quote.close.len()),
        (ADJ_CLOSE, adjclose.len()),
        (VOLUME, quote.volume.len()),
    ] {
        if len != 0 && len != n {
            tracing::warn!(
                "{}: {} has {} values for {} timestamps",
                chart.meta.symbol,
                name,
                len,
                n
            );
        }
    }

    // Some instruments come back without an adjusted series at all.
    let adjust = options.adjusted && !adjclose.is_empty();
    if options.adjusted && adjclose.is_empty() && n > 0 {
        tracing::warn!(
            "{}: no adjusted close in response, using raw close",
            chart.meta.symbol
        );
    }

    let mut bars: Vec<Bar> = Vec::with_capacity(n);
    for (i, &ts) in chart.timestamp.iter().enumerate() {
        let date = trading_date(ts, chart.meta.gmtoffset)?;
        if !options.in_range(date) {
            tracing::debug!(
                "{}: dropping row for {} outside range",
                chart.meta.symbol,
                date
            );
            continue;
        }
        let bar = Bar {
            date,
            open: at(&quote.open, i),
            high: at(&quote.high, i),
            low: at(&quote.low, i),
            close: at(&quote.close, i),
            adj_close: at(adjclose, i),
            volume: at(&quote.volume, i),
        };
        if !bar.has_prices() {
            tracing::debug!("{}: dropping empty row for {}", chart.meta.symbol, date);
            continue;
        }
        if bars.last().is_some_and(|last| last.date == date) {
            tracing::debug!("{}: dropping repeated row for {}", chart.meta.symbol, date);
            continue;
        }
        bars.push(if adjust { bar.adjust() } else { bar });
    }

    let mut fields: Vec<(&str, Vec<Option<f64>>)> = vec![
        (OPEN, bars.iter().map(|b| b.open).collect()),
        (HIGH, bars.iter().map(|b| b.high).collect()),
        (LOW, bars.iter().map(|b| b.low).collect()),
        (CLOSE, bars.iter().map(|b| b.close).collect()),
    ];
    if !options.adjusted {
        fields.push((ADJ_CLOSE, bars.iter().map(|b| b.adj_close).collect()));
    }
    fields.push((VOLUME, bars.iter().map(|b| b.volume).collect()));

    let dates = bars.iter().map(|b| b.date).collect();
    let (names, columns): (Vec<&str>, Vec<_>) = fields.into_iter().unzip();
    let shape = if options.multi_level {
        ResponseShape::TwoLevel(
            names
                .into_iter()
                .map(|name| (name.to_string(), chart.meta.symbol.clone()))
                .collect(),
        )
    } else {
        ResponseShape::Flat(names.into_iter().map(str::to_string).collect())
    };
    PriceFrame::new(dates, shape, columns)
}

fn trading_date(timestamp: i64, gmtoffset: i64) -> Result<NaiveDate, ExportError> {
    timestamp
        .checked_add(gmtoffset)
        .and_then(|local| DateTime::from_timestamp(local, 0))
        .map(|dt| dt.date_naive())
        .ok_or_else(|| {
            ExportError::UnrecognizedSchema(format!("timestamp {} out of range", timestamp))
        })
}

fn at(values: &[Option<f64>], idx: usize) -> Option<f64> {
    values.get(idx).copied().flatten()
}
