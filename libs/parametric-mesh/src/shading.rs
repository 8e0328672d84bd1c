//! # Shading Modes
//!
//! Controls how side normals of the revolved solids are biased.

use serde::{Deserialize, Serialize};

/// Side-normal mode for cylinders and cones.
///
/// The mode selects the bias factor mixed into the side normals:
///
/// | Mode      | Factor | Cylinder side normal       | Cone side normal            |
/// |-----------|--------|----------------------------|-----------------------------|
/// | `Faceted` | 0      | purely radial              | slant of the lateral faces  |
/// | `Smooth`  | 1      | radial tilted toward caps  | slant pulled by `(0,-2,0)`  |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Hard edge between side and caps.
    #[default]
    Faceted,
    /// Side normals blended with the cap direction.
    Smooth,
}

impl Shading {
    /// Returns the scalar bias factor mixed into side normals.
    #[inline]
    pub fn bias_factor(self) -> f32 {
        match self {
            Shading::Faceted => 0.0,
            Shading::Smooth => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_factor() {
        assert_eq!(Shading::Faceted.bias_factor(), 0.0);
        assert_eq!(Shading::Smooth.bias_factor(), 1.0);
    }

    #[test]
    fn test_default_is_faceted() {
        assert_eq!(Shading::default(), Shading::Faceted);
    }

    #[test]
    fn test_deserialize_snake_case() {
        let shading: Shading = serde_json::from_str("\"smooth\"").unwrap();
        assert_eq!(shading, Shading::Smooth);
    }
}
