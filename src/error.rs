//! Error types for the shape engine.

/// Error returned by mutating [`crate::ShapeBuilder`] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A supplied coordinate is NaN or infinite. Nothing was inserted.
    #[error("invalid coordinate {name}: {value} is not finite")]
    InvalidCoordinate { name: &'static str, value: f64 },
}

/// Error returned when building a [`crate::BuilderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a config.
    #[error("failed to parse builder config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Epsilon must be finite and non-negative.
    #[error("invalid epsilon: {0}")]
    InvalidEpsilon(f64),
}
