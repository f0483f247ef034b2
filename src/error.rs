//! Domain error taxonomy for series resolution and normalization.
//!
//! Row-level defects (bad date token, non-numeric value) are a data-quality
//! concern handled by dropping the row inside the normalizer; only
//! whole-series conditions surface through these types.

use chrono::NaiveDate;
use thiserror::Error;

/// A single source in the fallback chain could not deliver rows.
///
/// This is the per-attempt outcome the resolver iterates over; it never
/// escapes to the consumer on its own, only aggregated into
/// [`SeriesError::NoDataAvailable`].
#[derive(Debug, Error)]
#[error("source '{source_name}' unavailable: {reason}")]
pub struct SourceUnavailable {
    pub source_name: &'static str,
    pub reason: String,
}

impl SourceUnavailable {
    pub fn new(source_name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            source_name,
            reason: reason.into(),
        }
    }
}

/// Errors surfaced to consumers of the series boundary.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// The caller asked for an indicator outside the static table.
    #[error("unknown indicator '{0}'")]
    UnknownIndicator(String),

    /// Every eligible source in the chain was unavailable.
    #[error("no data available for '{indicator}' ({attempts})")]
    NoDataAvailable {
        indicator: &'static str,
        attempts: String,
    },

    /// No row survived parsing and value coercion.
    #[error("series for '{indicator}' has no valid observations")]
    EmptySeries { indicator: &'static str },

    /// A nominally monthly source delivered a gap. Monthly feeds are never
    /// interpolated; a hole means the upstream data is broken.
    #[error("monthly series for '{indicator}' is missing {month}")]
    IrregularSeries {
        indicator: &'static str,
        month: NaiveDate,
    },
}
