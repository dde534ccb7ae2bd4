use thiserror::Error;

/// Top-level error type for the measurement engine.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}

/// Errors raised while validating a measurement configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("proximity threshold must be a positive finite distance, got {0} m")]
    InvalidProximityThreshold(f64),
}

/// Errors related to the annotation arena.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("annotation not found")]
    NotFound,

    #[error("annotation is a {actual}, expected a {expected}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Convenience type alias for results using [`MeasureError`].
pub type Result<T> = std::result::Result<T, MeasureError>;
