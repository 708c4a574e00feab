//! Configuration errors.

/// Errors raised while loading or validating a [`crate::config::ReachConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Smoothing window must be at least 1, got {window}")]
    InvalidWindow { window: usize },

    #[error("Smoothing alpha must lie in (0, 1), got {alpha}")]
    InvalidAlpha { alpha: f64 },

    #[error("Variance bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidVarianceBounds { min: f64, max: f64 },

    #[error("Queue capacity must be at least 1")]
    InvalidQueueCapacity,
}
