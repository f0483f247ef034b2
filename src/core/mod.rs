//! Core domain types and abstractions

pub mod indicator;
pub mod log;
pub mod series;

// Re-export main types for cleaner imports
pub use indicator::{Frequency, Indicator, IndicatorSpec};
pub use series::{Observation, RawObservation, Series};
