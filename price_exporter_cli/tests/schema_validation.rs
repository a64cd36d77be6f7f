use chrono::NaiveDate;
use price_exporter_lib::{to_json, Record, DEFAULT_PRECISION};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_schema() -> Value {
    let path = workspace_root().join("schema").join("record.schema.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn sample_output() -> Value {
    let records = vec![
        Record::new(NaiveDate::from_ymd_opt(2021, 5, 3).unwrap(), Some(132.04)),
        Record::new(NaiveDate::from_ymd_opt(2021, 5, 4).unwrap(), None),
        Record::new(NaiveDate::from_ymd_opt(2021, 5, 5).unwrap(), Some(127.1)),
    ];
    let text = to_json(&records, Some(DEFAULT_PRECISION)).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// Positive validation: rendered output conforms to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_rendered_records_conform_to_schema() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("record schema compiles");
    let output = sample_output();
    let result = validator.validate(&output);
    if let Err(e) = &result {
        panic!("rendered output failed validation: {e}");
    }
}

#[test]
fn test_empty_output_conforms_to_schema() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("record schema compiles");
    assert!(validator.is_valid(&json!([])));
}

// ---------------------------------------------------------------------------
// Negative validation: the schema catches shape drift
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_extra_keys() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("record schema compiles");
    let data = json!([{"Date": "2021-05-03", "Close": 1.0, "Open": 1.0}]);
    assert!(!validator.is_valid(&data));
}

#[test]
fn test_schema_rejects_timestamps() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("record schema compiles");
    let data = json!([{"Date": "2021-05-03T00:00:00", "Close": 1.0}]);
    assert!(!validator.is_valid(&data));
}

#[test]
fn test_schema_rejects_string_prices() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("record schema compiles");
    let data = json!([{"Date": "2021-05-03", "Close": "132.04"}]);
    assert!(!validator.is_valid(&data));
}

#[test]
fn test_schema_rejects_missing_close() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("record schema compiles");
    let data = json!([{"Date": "2021-05-03"}]);
    assert!(!validator.is_valid(&data));
}
