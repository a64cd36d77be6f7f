use serde::{Deserialize, Serialize};

/// Top-level envelope of a `/v8/finance/chart/{symbol}` response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChartResponse {
    pub chart: Chart,
}

/// Either a result list or an error payload. Unknown symbols come back with
/// `result: null` and an `error` object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

/// One symbol's time series. `timestamp` is absent when the range holds no
/// trading days.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    /// Seconds east of UTC for the exchange, used to recover trading dates.
    #[serde(default)]
    pub gmtoffset: i64,
    pub timezone: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub data_granularity: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseIndicator>,
}

/// Per-field price arrays, aligned with `ChartResult::timestamp`. Entries are
/// null for days the provider has no value for.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct QuoteIndicator {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AdjCloseIndicator {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}
