//! JSON rendering of exported records.

use crate::error::ExportError;
use crate::record::Record;

/// Decimal digits kept in emitted prices unless overridden.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest precision that still leaves room in an f64 mantissa.
pub const MAX_PRECISION: u32 = 15;

/// Serializes records as a compact JSON array, one object per row.
///
/// With `Some(digits)`, prices are rounded half away from zero to that many
/// decimal places first. `None` writes them unrounded.
pub fn to_json(records: &[Record], precision: Option<u32>) -> Result<String, ExportError> {
    match precision {
        Some(digits) => {
            let rounded: Vec<Record> = records
                .iter()
                .map(|r| Record {
                    close: r.close.map(|c| round_to(c, digits)),
                    ..*r
                })
                .collect();
            Ok(serde_json::to_string(&rounded)?)
        }
        None => Ok(serde_json::to_string(records)?),
    }
}

/// Rounds to `digits` decimal places. Values whose scaled form would lose
/// integer precision are returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let digits = digits.min(MAX_PRECISION);
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(53) {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn renders_array_of_objects() {
        let records = vec![
            Record::new(date(2), Some(74.33)),
            Record::new(date(3), Some(73.61)),
        ];
        assert_eq!(
            to_json(&records, Some(DEFAULT_PRECISION)).unwrap(),
            r#"[{"Date":"2020-01-02","Close":74.33},{"Date":"2020-01-03","Close":73.61}]"#
        );
    }

    #[test]
    fn empty_is_empty_array() {
        assert_eq!(to_json(&[], Some(DEFAULT_PRECISION)).unwrap(), "[]");
    }

    #[test]
    fn float_noise_is_trimmed() {
        let records = vec![Record::new(date(2), Some(74.33000183105469))];
        assert_eq!(
            to_json(&records, Some(DEFAULT_PRECISION)).unwrap(),
            r#"[{"Date":"2020-01-02","Close":74.3300018311}]"#
        );
    }

    #[test]
    fn no_precision_keeps_full_value() {
        let records = vec![Record::new(date(2), Some(74.33000183105469))];
        assert_eq!(
            to_json(&records, None).unwrap(),
            r#"[{"Date":"2020-01-02","Close":74.33000183105469}]"#
        );
    }

    #[test]
    fn null_close_survives_rounding() {
        let records = vec![Record::new(date(2), None)];
        assert_eq!(
            to_json(&records, Some(2)).unwrap(),
            r#"[{"Date":"2020-01-02","Close":null}]"#
        );
    }

    #[test]
    fn round_to_digits() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.235001, 2), 1.24);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(132.04, 10), 132.04);
    }

    #[test]
    fn round_to_leaves_huge_values_alone() {
        assert_eq!(round_to(1.0e12 + 0.123, 10), 1.0e12 + 0.123);
        assert!(round_to(f64::NAN, 2).is_nan());
    }
}
