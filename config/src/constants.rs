//! # Configuration Constants
//!
//! Centralized constants for the mesh generators. Precision values,
//! tessellation minimums, safety limits and the demo scene presets are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Minimum tessellation parameters
//! - **Limits**: Maximum values for safety bounds
//! - **Presets**: Parameters of the light arrows, point-light marker and terrain

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Allowed deviation of a vertex normal's length from 1.0.
///
/// Normals are computed and stored in `f32`, so a normalized vector can
/// drift from unit length by a few ULPs.
pub const NORMAL_TOLERANCE: f32 = 1e-5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum angular segment count for revolved solids and spheres.
///
/// Fewer than three segments cannot enclose any area.
pub const MIN_SEGMENTS: u32 = 3;

/// Minimum latitude division count for spheres.
///
/// Two divisions yield exactly one ring of vertices at the equator.
pub const MIN_RINGS: u32 = 2;

/// Minimum number of grid steps from the center to the edge of a grid.
pub const MIN_GRID_HALF_EXTENT: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a single generator call may produce.
///
/// Indices are `u32`, and the terrain preset alone needs roughly one million
/// vertices, so the bound leaves generous headroom while keeping allocations
/// sane.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// assert!(MAX_VERTICES as u64 <= u32::MAX as u64);
/// ```
pub const MAX_VERTICES: usize = 16_000_000;

/// Smallest radius, height or range a generator accepts.
///
/// Normals of the revolved solids are normalized from products of two
/// lengths. Below this bound their squared length can underflow `f32`.
pub const MIN_LENGTH: f32 = 1e-6;

/// Largest radius, height or range a generator accepts.
///
/// Above this bound the squared length of a normal product can overflow `f32`.
pub const MAX_LENGTH: f32 = 1e6;

// =============================================================================
// PRESET CONSTANTS
// =============================================================================

/// Angular resolution of the directional-light arrow.
pub const ARROW_SEGMENTS: u32 = 16;

/// Radius of the arrow shaft cylinder.
pub const ARROW_SHAFT_RADIUS: f32 = 0.01;

/// Length of the arrow shaft cylinder.
pub const ARROW_SHAFT_LENGTH: f32 = 0.2;

/// Base radius of the arrow head cone.
pub const ARROW_HEAD_RADIUS: f32 = 0.02;

/// Height of the arrow head cone.
pub const ARROW_HEAD_LENGTH: f32 = 0.04;

/// Longitude divisions of the point-light marker sphere.
pub const POINT_LIGHT_SEGMENTS: u32 = 32;

/// Latitude divisions of the point-light marker sphere.
pub const POINT_LIGHT_RINGS: u32 = 16;

/// Radius of the point-light marker sphere.
pub const POINT_LIGHT_RADIUS: f32 = 1.0;

/// Grid steps from center to edge of the terrain.
pub const TERRAIN_HALF_EXTENT: u32 = 500;

/// World-space span of the terrain grid.
pub const TERRAIN_RANGE: f32 = 5.0;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the validation settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.normal_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Allowed deviation of normal length from 1.0.
    pub normal_tolerance: f32,
    /// Upper bound on the vertex count of a single mesh.
    pub max_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and vertex limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-4, 1024).expect("valid config");
    /// assert_eq!(cfg.max_vertices, 1024);
    /// ```
    pub fn new(normal_tolerance: f32, max_vertices: usize) -> Result<Self, ConfigError> {
        if !(normal_tolerance > 0.0 && normal_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(normal_tolerance));
        }
        if max_vertices == 0 || max_vertices as u64 > u32::MAX as u64 {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            normal_tolerance,
            max_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            normal_tolerance: NORMAL_TOLERANCE,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is zero, negative or not finite.
    InvalidTolerance(f32),
    /// Raised when the vertex limit is zero or not addressable by `u32` indices.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "normal_tolerance must be positive: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be in 1..=u32::MAX: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a vector length is 1.0 within `tolerance`.
///
/// # Example
///
/// ```rust
/// use config::constants::{is_unit_length, NORMAL_TOLERANCE};
///
/// assert!(is_unit_length(1.000001, NORMAL_TOLERANCE));
/// assert!(!is_unit_length(0.9, NORMAL_TOLERANCE));
/// ```
#[inline]
pub fn is_unit_length(length: f32, tolerance: f32) -> bool {
    (length - 1.0).abs() <= tolerance
}
