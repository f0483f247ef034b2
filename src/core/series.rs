//! Series data model: raw rows as delivered by a source, and the validated
//! monthly series handed to consumers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An unvalidated row as it arrives from a source. The token may be an ISO
/// date or a compact month+year digit code; the value may not be numeric at
/// all. Validation happens in the normalizer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    pub token: String,
    pub value: String,
}

impl RawObservation {
    pub fn new(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            value: value.into(),
        }
    }
}

/// A validated observation: first day of its month, finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// An ordered, gapless monthly series for one indicator.
///
/// Construction goes through the normalizer, so holders can rely on the
/// invariants: dates ascending, one observation per month, every month in
/// `[first, last]` present, all values finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    pub(crate) fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Restricts the series to `[from, to]` (inclusive, month granularity).
    /// `None` bounds leave that side open; the result keeps the gapless
    /// invariant since it is a contiguous slice.
    pub fn clip(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Series {
        let observations = self
            .observations
            .iter()
            .filter(|obs| {
                from.is_none_or(|f| obs.date >= month_floor(f))
                    && to.is_none_or(|t| obs.date <= month_floor(t))
            })
            .copied()
            .collect();
        Series { observations }
    }

    /// Month-over-month percentage change, one entry per observation after
    /// the first. This is the Δ% series the dashboard shows for IPC/ITCRM.
    pub fn monthly_changes(&self) -> Vec<(NaiveDate, f64)> {
        self.observations
            .windows(2)
            .filter(|w| w[0].value != 0.0)
            .map(|w| (w[1].date, (w[1].value - w[0].value) / w[0].value * 100.0))
            .collect()
    }
}

/// Snaps a date to the first day of its month.
pub fn month_floor(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, month: u32, value: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            value,
        }
    }

    fn sample_series() -> Series {
        Series::from_observations(vec![
            obs(2023, 1, 100.0),
            obs(2023, 2, 110.0),
            obs(2023, 3, 99.0),
            obs(2023, 4, 99.0),
        ])
    }

    #[test]
    fn test_clip_inclusive_bounds() {
        let series = sample_series();
        let clipped = series.clip(
            NaiveDate::from_ymd_opt(2023, 2, 1),
            NaiveDate::from_ymd_opt(2023, 3, 1),
        );
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped.first().unwrap().value, 110.0);
        assert_eq!(clipped.last().unwrap().value, 99.0);
    }

    #[test]
    fn test_clip_snaps_bounds_to_month_start() {
        let series = sample_series();
        // A mid-month bound covers that whole month.
        let clipped = series.clip(None, NaiveDate::from_ymd_opt(2023, 2, 15));
        assert_eq!(clipped.len(), 2);
    }

    #[test]
    fn test_clip_open_bounds_returns_everything() {
        let series = sample_series();
        assert_eq!(series.clip(None, None), series);
    }

    #[test]
    fn test_monthly_changes() {
        let series = sample_series();
        let changes = series.monthly_changes();
        assert_eq!(changes.len(), 3);
        assert!((changes[0].1 - 10.0).abs() < 1e-9);
        assert!((changes[1].1 - -10.0).abs() < 1e-9);
        assert!((changes[2].1 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_changes_skips_zero_base() {
        let series = Series::from_observations(vec![
            obs(2023, 1, 0.0),
            obs(2023, 2, 5.0),
            obs(2023, 3, 10.0),
        ]);
        let changes = series.monthly_changes();
        assert_eq!(changes.len(), 1);
        assert!((changes[0].1 - 100.0).abs() < 1e-9);
    }
}
