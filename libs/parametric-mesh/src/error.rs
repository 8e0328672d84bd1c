//! # Mesh Errors
//!
//! Error types for mesh generation operations.
//!
//! Generators validate their parameters at the boundary and reject
//! out-of-range values instead of emitting degenerate geometry.

use config::constants::{ConfigError, MAX_LENGTH, MIN_LENGTH};
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A generator parameter is outside its valid range.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// What the parameter must satisfy
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scene configuration could not be parsed
    #[error("Scene configuration error: {0}")]
    SceneConfig(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

/// Rejects segment counts that cannot close a ring.
pub(crate) fn check_segments(segments: u32) -> MeshResult<()> {
    if segments < config::constants::MIN_SEGMENTS {
        return Err(MeshError::invalid_parameter(
            "segments",
            format!(
                "must be at least {}: {}",
                config::constants::MIN_SEGMENTS,
                segments
            ),
        ));
    }
    Ok(())
}

/// Rejects lengths outside `MIN_LENGTH..=MAX_LENGTH`, including NaN.
pub(crate) fn check_positive(parameter: &'static str, value: f32) -> MeshResult<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&value) {
        return Err(MeshError::invalid_parameter(
            parameter,
            format!("must be in {}..={}: {}", MIN_LENGTH, MAX_LENGTH, value),
        ));
    }
    Ok(())
}

/// Rejects meshes whose vertices would not fit the configured budget.
pub(crate) fn check_vertex_budget(count: usize) -> MeshResult<()> {
    let max = config::constants::MAX_VERTICES;
    if count > max {
        return Err(MeshError::TooManyVertices { count, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("radius", "must be in 0.000001..=1000000: 0");
        assert!(err.to_string().contains("radius"));
        assert!(err.to_string().contains("1000000"));

        let err = MeshError::TooManyVertices { count: 10, max: 5 };
        assert_eq!(err.to_string(), "Too many vertices: 10 (max: 5)");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }

    #[test]
    fn test_check_positive() {
        assert!(check_positive("radius", 1.0).is_ok());
        assert!(check_positive("radius", 0.0).is_err());
        assert!(check_positive("radius", -2.0).is_err());
        assert!(check_positive("radius", f32::NAN).is_err());
        assert!(check_positive("radius", f32::INFINITY).is_err());
    }

    #[test]
    fn test_check_positive_limits() {
        assert!(check_positive("radius", MIN_LENGTH).is_ok());
        assert!(check_positive("radius", MAX_LENGTH).is_ok());
        assert!(check_positive("radius", MIN_LENGTH / 2.0).is_err());
        assert!(check_positive("radius", MAX_LENGTH * 2.0).is_err());
        assert!(matches!(
            check_positive("depth", 1e-25),
            Err(MeshError::InvalidParameter { parameter: "depth", .. })
        ));
        assert!(check_positive("depth", 1e30).is_err());
    }

    #[test]
    fn test_check_segments() {
        assert!(check_segments(3).is_ok());
        assert!(matches!(
            check_segments(2),
            Err(MeshError::InvalidParameter { parameter: "segments", .. })
        ));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidVertexLimit(0).into();
        assert!(matches!(err, MeshError::Config(_)));
    }
}
