//! HTTP client for the Yahoo Finance chart API.

use std::time::Duration;

use url::Url;

use crate::{
    query::ChartQuery,
    types::{ChartResponse, ChartResult},
    user_agent::get_user_agent,
    Error,
};

/// Default request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Yahoo Finance chart API.
///
/// Sends requests with a randomized browser user agent. Each request builds a
/// fresh `reqwest::Client` with the configured timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://query2.finance.yahoo.com`.
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production chart API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://query2.finance.yahoo.com".to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, symbol: &str, query: &ChartQuery) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::InvalidUrl(e.to_string())
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidUrl(format!("{} cannot be a base", self.base_api_url))
            })?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        Ok(query.add_to_url(&url))
    }

    /// Fetches the daily chart for `symbol` over the query's date range.
    ///
    /// An error payload in the body takes precedence over the HTTP status, so
    /// an unknown symbol reports the provider's own description.
    pub async fn get_chart(&self, symbol: &str, query: &ChartQuery) -> Result<ChartResult, Error> {
        let url = self.get_url(symbol, query)?;
        tracing::debug!("GET {}", url);

        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get chart for {}: {}", symbol, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        let parsed = serde_json::from_str::<ChartResponse>(&body);

        if let Ok(ChartResponse { chart }) = &parsed {
            if let Some(err) = &chart.error {
                tracing::error!(
                    "Provider error for {}: {} {}",
                    symbol,
                    err.code,
                    err.description
                );
                return Err(Error::Provider {
                    code: err.code.clone(),
                    description: err.description.clone(),
                });
            }
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = parsed.map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse chart: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })?;

        parsed
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| Error::Parse("chart response contained no result".to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn url_contains_symbol_path() {
        let client = Client::with_base_url("http://localhost:1234");
        let query = ChartQuery::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let url = client.get_url("AAPL", &query).unwrap();
        assert_eq!(url.path(), "/v8/finance/chart/AAPL");
        assert_eq!(url.host_str(), Some("localhost"));
    }

    #[test]
    fn url_escapes_slash_in_symbol() {
        let client = Client::with_base_url("http://localhost:1234/");
        let query = ChartQuery::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let url = client.get_url("BRK/B", &query).unwrap();
        assert_eq!(url.path(), "/v8/finance/chart/BRK%2FB");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let client = Client::with_base_url("not a url");
        let query = ChartQuery::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let err = client.get_url("AAPL", &query).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn default_client_points_at_yahoo() {
        let client = Client::default();
        assert_eq!(client.base_url(), "https://query2.finance.yahoo.com");
    }
}
