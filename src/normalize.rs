//! Series normalization: turns raw source rows into a clean, gapless
//! monthly series.
//!
//! Row-level defects are dropped silently (bad rows in an upstream feed are
//! expected); only whole-series conditions become errors. Quarterly sources
//! are re-indexed to a monthly grid with linear interpolation. Monthly
//! sources must already be gapless; a hole fails with
//! [`SeriesError::IrregularSeries`] instead of being papered over.

use crate::core::{Frequency, IndicatorSpec, Observation, RawObservation, Series};
use crate::error::SeriesError;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Parses a timestamp token into the first day of its month.
///
/// Two encodings are supported:
/// - ISO dates (`2023-04-01`, `2023/04/01`), parsed directly;
/// - compact month+year digit runs (`"112022"` → Nov 2022, `"12023"` →
///   Jan 2023): the last four digits are the year, the leading digits the
///   month.
///
/// Returns `None` for anything else: tokens with stray non-digit characters,
/// digit runs shorter than five, months outside 1..=12, years before 1900.
pub fn parse_month_token(token: &str) -> Option<NaiveDate> {
    let token = token.trim();

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return NaiveDate::from_ymd_opt(date.year(), date.month(), 1);
        }
    }

    if token.len() < 5 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (month_digits, year_digits) = token.split_at(token.len() - 4);
    let month: u32 = month_digits.parse().ok()?;
    let year: i32 = year_digits.parse().ok()?;
    if !(1..=12).contains(&month) || year < 1900 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Normalizes raw rows for `spec` into an ordered, gapless monthly [`Series`].
pub fn normalize(raw: &[RawObservation], spec: &IndicatorSpec) -> Result<Series, SeriesError> {
    // BTreeMap gives ascending order for free; inserting in source order
    // makes the last row win when a month repeats.
    let mut by_month: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut dropped = 0usize;

    for row in raw {
        let Some(date) = parse_month_token(&row.token) else {
            dropped += 1;
            continue;
        };
        let Ok(value) = row.value.trim().parse::<f64>() else {
            dropped += 1;
            continue;
        };
        if !value.is_finite() {
            dropped += 1;
            continue;
        }
        by_month.insert(date, value);
    }

    if dropped > 0 {
        debug!(
            indicator = spec.name,
            dropped, "Dropped unparseable rows during normalization"
        );
    }

    if by_month.is_empty() {
        return Err(SeriesError::EmptySeries {
            indicator: spec.name,
        });
    }

    let observations = match spec.frequency {
        Frequency::Quarterly => interpolate_monthly(&by_month),
        Frequency::Monthly => {
            if let Some(gap) = first_gap(&by_month) {
                return Err(SeriesError::IrregularSeries {
                    indicator: spec.name,
                    month: gap,
                });
            }
            by_month
                .into_iter()
                .map(|(date, value)| Observation { date, value })
                .collect()
        }
    };

    Ok(Series::from_observations(observations))
}

/// Months elapsed since year zero; adjacent calendar months differ by one.
fn month_index(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}

/// First missing month in `[min, max]`, if any.
fn first_gap(by_month: &BTreeMap<NaiveDate, f64>) -> Option<NaiveDate> {
    let mut expected = *by_month.keys().next()?;
    for date in by_month.keys() {
        if *date != expected {
            return Some(expected);
        }
        expected = expected + Months::new(1);
    }
    None
}

/// Re-indexes known observations onto a full monthly grid over their span,
/// filling missing months by linear interpolation between the two nearest
/// known neighbours.
fn interpolate_monthly(known: &BTreeMap<NaiveDate, f64>) -> Vec<Observation> {
    let (&first, _) = known.first_key_value().expect("non-empty map");
    let (&last, _) = known.last_key_value().expect("non-empty map");

    let mut observations = Vec::with_capacity((month_index(last) - month_index(first) + 1) as usize);
    let mut month = first;
    while month <= last {
        let value = match known.get(&month) {
            Some(v) => *v,
            None => {
                let (&prev_date, &prev_value) = known
                    .range(..month)
                    .next_back()
                    .expect("grid starts at a known month");
                let (&next_date, &next_value) = known
                    .range(month..)
                    .next()
                    .expect("grid ends at a known month");
                let span = (month_index(next_date) - month_index(prev_date)) as f64;
                let offset = (month_index(month) - month_index(prev_date)) as f64;
                prev_value + (next_value - prev_value) * offset / span
            }
        };
        observations.push(Observation { date: month, value });
        month = month + Months::new(1);
    }
    observations
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTHLY_SPEC: IndicatorSpec = IndicatorSpec {
        name: "test-monthly",
        source_id: "test.monthly",
        frequency: Frequency::Monthly,
        definition: "",
    };

    const QUARTERLY_SPEC: IndicatorSpec = IndicatorSpec {
        name: "test-quarterly",
        source_id: "test.quarterly",
        frequency: Frequency::Quarterly,
        definition: "",
    };

    fn raw(token: &str, value: &str) -> RawObservation {
        RawObservation::new(token, value)
    }

    fn ymd(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn test_parse_compact_codes() {
        assert_eq!(parse_month_token("112022"), Some(ymd(2022, 11)));
        assert_eq!(parse_month_token("12023"), Some(ymd(2023, 1)));
        assert_eq!(parse_month_token("122024"), Some(ymd(2024, 12)));
    }

    #[test]
    fn test_parse_iso_dates() {
        assert_eq!(parse_month_token("2023-04-01"), Some(ymd(2023, 4)));
        // Mid-month dates snap to the first of the month.
        assert_eq!(parse_month_token("2023-04-17"), Some(ymd(2023, 4)));
        assert_eq!(parse_month_token("2023/04/01"), Some(ymd(2023, 4)));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        // Year before 1900.
        assert_eq!(parse_month_token("121899"), None);
        // Month out of range.
        assert_eq!(parse_month_token("132023"), None);
        assert_eq!(parse_month_token("02023"), None);
        // Fewer than five digits.
        assert_eq!(parse_month_token("2023"), None);
        // Non-numeric tokens.
        assert_eq!(parse_month_token("13202x"), None);
        assert_eq!(parse_month_token("enero"), None);
        assert_eq!(parse_month_token(""), None);
    }

    #[test]
    fn test_normalize_drops_bad_rows() {
        let rows = vec![
            raw("12023", "100.0"),
            raw("121899", "999.0"),
            raw("22023", "not-a-number"),
            raw("22023", "101.5"),
            raw("32023", "NaN"),
            raw("32023", "103.0"),
        ];
        let series = normalize(&rows, &MONTHLY_SPEC).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first().unwrap().value, 100.0);
        assert_eq!(series.observations()[1].value, 101.5);
        assert_eq!(series.last().unwrap().value, 103.0);
    }

    #[test]
    fn test_normalize_last_write_wins() {
        let rows = vec![raw("12023", "1.0"), raw("2023-01-01", "2.0")];
        let series = normalize(&rows, &MONTHLY_SPEC).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.first().unwrap().value, 2.0);
    }

    #[test]
    fn test_normalize_sorts_ascending() {
        let rows = vec![
            raw("32023", "3.0"),
            raw("12023", "1.0"),
            raw("22023", "2.0"),
        ];
        let series = normalize(&rows, &MONTHLY_SPEC).unwrap();
        let dates: Vec<_> = series.observations().iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![ymd(2023, 1), ymd(2023, 2), ymd(2023, 3)]);
    }

    #[test]
    fn test_normalize_empty_series() {
        let err = normalize(&[], &MONTHLY_SPEC).unwrap_err();
        assert!(matches!(err, SeriesError::EmptySeries { .. }));

        let rows = vec![raw("bogus", "1.0"), raw("12023", "xx")];
        let err = normalize(&rows, &MONTHLY_SPEC).unwrap_err();
        assert!(matches!(err, SeriesError::EmptySeries { .. }));
    }

    #[test]
    fn test_normalize_monthly_gap_is_irregular() {
        let rows = vec![
            raw("12023", "1.0"),
            raw("22023", "2.0"),
            raw("42023", "4.0"),
        ];
        let err = normalize(&rows, &MONTHLY_SPEC).unwrap_err();
        match err {
            SeriesError::IrregularSeries { month, .. } => assert_eq!(month, ymd(2023, 3)),
            other => panic!("expected IrregularSeries, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let rows = vec![
            raw("12023", "1.0"),
            raw("22023", "2.0"),
            raw("32023", "3.0"),
        ];
        let once = normalize(&rows, &MONTHLY_SPEC).unwrap();
        let twice = normalize(&rows, &MONTHLY_SPEC).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_quarterly_interpolation() {
        let rows = vec![raw("12023", "7.0"), raw("42023", "7.5")];
        let series = normalize(&rows, &QUARTERLY_SPEC).unwrap();
        assert_eq!(series.len(), 4);

        let values: Vec<f64> = series.observations().iter().map(|o| o.value).collect();
        assert_eq!(values[0], 7.0);
        assert_eq!(values[3], 7.5);
        // Intermediate months are strictly monotonic between the endpoints.
        assert!((values[1] - 7.0 - 0.5 / 3.0).abs() < 1e-9);
        assert!((values[2] - 7.0 - 1.0 / 3.0).abs() < 1e-9);
        assert!(values[0] < values[1] && values[1] < values[2] && values[2] < values[3]);
    }

    #[test]
    fn test_quarterly_grid_is_gapless() {
        let rows = vec![
            raw("12022", "7.0"),
            raw("42022", "6.8"),
            raw("72022", "7.2"),
            raw("102022", "7.1"),
        ];
        let series = normalize(&rows, &QUARTERLY_SPEC).unwrap();
        assert_eq!(series.len(), 10);
        for window in series.observations().windows(2) {
            assert_eq!(
                month_index(window[1].date) - month_index(window[0].date),
                1
            );
        }
    }
}
