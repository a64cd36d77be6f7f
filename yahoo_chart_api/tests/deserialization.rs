use yahoo_chart_api::types::ChartResponse;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_chart_full() {
    let json = load_fixture("chart_aapl.json");
    let resp: ChartResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.chart.error.is_none());

    let results = resp.chart.result.unwrap();
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert_eq!(result.meta.symbol, "AAPL");
    assert_eq!(result.meta.gmtoffset, -18000);
    assert_eq!(result.meta.currency.as_deref(), Some("USD"));
    assert_eq!(
        result.meta.exchange_timezone_name.as_deref(),
        Some("America/New_York")
    );
    assert_eq!(result.timestamp.len(), 5);
    assert_eq!(result.timestamp[0], 1577975400);

    let quote = &result.indicators.quote[0];
    assert_eq!(quote.close[0], Some(75.0875));
    assert_eq!(quote.volume[4], Some(132079200.0));
    assert_eq!(result.indicators.adjclose[0].adjclose[1], Some(73.61));
}

#[test]
fn deserialize_chart_without_timestamps() {
    let json = load_fixture("chart_empty.json");
    let resp: ChartResponse = serde_json::from_str(&json).unwrap();
    let result = &resp.chart.result.unwrap()[0];
    assert!(result.timestamp.is_empty());
    assert!(result.indicators.quote[0].close.is_empty());
    assert!(result.indicators.adjclose[0].adjclose.is_empty());
}

#[test]
fn deserialize_chart_error() {
    let json = load_fixture("chart_not_found.json");
    let resp: ChartResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.chart.result.is_none());
    let err = resp.chart.error.unwrap();
    assert_eq!(err.code, "Not Found");
    assert!(err.description.contains("delisted"));
}

#[test]
fn deserialize_null_prices() {
    let json = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "XYZ", "gmtoffset": 0},
                "timestamp": [1620048600],
                "indicators": {
                    "quote": [{"open": [null], "high": [null], "low": [null], "close": [null], "volume": [null]}]
                }
            }],
            "error": null
        }
    }"#;
    let resp: ChartResponse = serde_json::from_str(json).unwrap();
    let result = &resp.chart.result.unwrap()[0];
    assert_eq!(result.indicators.quote[0].close, vec![None]);
    assert!(result.indicators.adjclose.is_empty());
}
