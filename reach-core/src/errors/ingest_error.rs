//! Sample ingestion errors.
//!
//! A rejected sample is skipped locally with no state mutation; none of
//! these variants are fatal for the run.

/// Errors raised while validating an incoming position sample.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Sample timestamp {time} is negative")]
    NegativeTime { time: f64 },

    #[error("Sample timestamp is not a finite number")]
    NonFiniteTime,

    #[error("Sample position contains a non-finite coordinate")]
    NonFinitePosition,

    #[error("Sample timestamp {time} precedes current time {current}")]
    TimeRegression { time: f64, current: f64 },
}
