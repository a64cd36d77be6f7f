//! Query parameters for the daily chart endpoint.

use chrono::{Days, NaiveDate, Utc};
use url::Url;

/// Parameters for a daily chart request: a date range and whether the
/// adjusted close series should be included.
///
/// Dates are turned into Unix timestamps at UTC midnight, padded by a day
/// before the start and two days after the end. Exchanges far from UTC open
/// their sessions on the previous or next UTC day, so callers trim the
/// result back to the requested trading dates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartQuery {
    /// First calendar day of the range.
    pub start: NaiveDate,
    /// Last calendar day of the range. `None` runs up to the current time.
    pub end: Option<NaiveDate>,
    /// Request the split/dividend adjusted close series. Defaults to true.
    pub include_adjusted_close: bool,
}

impl ChartQuery {
    /// Creates a query starting at `start` and running up to now.
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            end: None,
            include_adjusted_close: true,
        }
    }

    /// Sets an inclusive end date.
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Toggles the adjusted close series.
    pub fn with_adjusted_close(mut self, include: bool) -> Self {
        self.include_adjusted_close = include;
        self
    }

    /// Lower bound of the request window as a Unix timestamp.
    pub fn period1(&self) -> i64 {
        midnight_utc(self.start.checked_sub_days(Days::new(1)).unwrap_or(self.start))
    }

    /// Upper bound of the request window as a Unix timestamp.
    pub fn period2(&self) -> i64 {
        match self.end {
            Some(end) => midnight_utc(end.checked_add_days(Days::new(2)).unwrap_or(end)),
            None => Utc::now().timestamp(),
        }
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("period1", &self.period1().to_string())
            .append_pair("period2", &self.period2().to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "div,split")
            .append_pair(
                "includeAdjustedClose",
                if self.include_adjusted_close {
                    "true"
                } else {
                    "false"
                },
            );
        url
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0).map_or(0, |dt| dt.and_utc().timestamp())
}
