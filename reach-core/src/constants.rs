//! Shared constants for the Reach engine.

/// Reach version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum spatial separation between samples before the
/// predictor recomputes (meters).
pub const DEFAULT_MIN_SAMPLE_DISTANCE: f64 = 0.05;

/// Default lower bound for the progression coordinate `s`.
pub const DEFAULT_MIN_PROGRESSION: f64 = 0.1;

/// Default lower bound for the angle variance in the normal distribution.
pub const DEFAULT_MIN_VARIANCE: f64 = 0.0625;

/// Default upper bound for the angle variance in the normal distribution.
pub const DEFAULT_MAX_VARIANCE: f64 = 0.125;

/// Default weight for the distance discount (0 disables it).
pub const DEFAULT_DISTANCE_WEIGHT: f64 = 0.5;

/// Default floor below which an angle likelihood resets a goal's streak.
pub const DEFAULT_PROBABILITY_FLOOR: f64 = 0.001;

/// Default decision threshold on the 0-100 probability scale.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 60.0;

/// Default sample queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Default emitter tick length in source time units (17 ~ 60 Hz).
pub const DEFAULT_TIME_STEP: f64 = 17.0;

/// Default emitter pacing factor (1.0 = real time, 0 = no sleeping).
pub const DEFAULT_PACING: f64 = 1.0;

/// Vectors shorter than this are treated as zero-length.
pub const VECTOR_EPSILON: f64 = 1e-4;

/// Initial goal distance before the first measurement.
/// Finite on purpose: infinity feeds a divide in the distance discount.
pub const DISTANCE_SENTINEL: f64 = 10_000.0;
