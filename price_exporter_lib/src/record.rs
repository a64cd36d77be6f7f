use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of output. Keys mirror the provider's column names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Date", with = "iso_date")]
    pub date: NaiveDate,
    /// `None` only when the provider itself reports no close for the day.
    #[serde(rename = "Close")]
    pub close: Option<f64>,
}

impl Record {
    pub fn new(date: NaiveDate, close: Option<f64>) -> Self {
        Self { date, close }
    }
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::validation::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
