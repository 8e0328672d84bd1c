//! # Demo Scene
//!
//! Builds the meshes the visualization demo uploads at start-up: the
//! directional-light arrow, the point-light marker and the terrain grid.
//!
//! ## Usage
//!
//! ```rust
//! use parametric_mesh::scene::{build_scene, SceneConfig};
//!
//! let config = SceneConfig::from_json(r#"{ "terrain": { "half_extent": 8, "range": 2.0 } }"#)?;
//! let scene = build_scene(&config)?;
//! assert_eq!(scene.terrain.mesh.vertex_count(), 17 * 17);
//! # Ok::<(), parametric_mesh::MeshError>(())
//! ```

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::primitives::{create_cone, create_cylinder, create_grid, create_sphere, GridMesh, SphereNormals};
use crate::shading::Shading;
use crate::vertex::SolidVertex;
use config::constants::{
    ARROW_HEAD_LENGTH, ARROW_HEAD_RADIUS, ARROW_SEGMENTS, ARROW_SHAFT_LENGTH, ARROW_SHAFT_RADIUS,
    POINT_LIGHT_RADIUS, POINT_LIGHT_RINGS, POINT_LIGHT_SEGMENTS, TERRAIN_HALF_EXTENT, TERRAIN_RANGE,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Parameters of the light-direction arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    /// Angular steps shared by shaft and head
    pub segments: u32,
    /// Radius of the shaft cylinder
    pub shaft_radius: f32,
    /// Length of the shaft cylinder
    pub shaft_length: f32,
    /// Base radius of the head cone
    pub head_radius: f32,
    /// Height of the head cone
    pub head_length: f32,
    /// Side-normal mode of both parts
    pub shading: Shading,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            segments: ARROW_SEGMENTS,
            shaft_radius: ARROW_SHAFT_RADIUS,
            shaft_length: ARROW_SHAFT_LENGTH,
            head_radius: ARROW_HEAD_RADIUS,
            head_length: ARROW_HEAD_LENGTH,
            shading: Shading::Faceted,
        }
    }
}

/// Parameters of the point-light marker sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLightConfig {
    /// Longitude divisions
    pub segments: u32,
    /// Latitude divisions, poles excluded
    pub rings: u32,
    /// Sphere radius
    pub radius: f32,
    /// Normal estimation method
    pub normals: SphereNormals,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            segments: POINT_LIGHT_SEGMENTS,
            rings: POINT_LIGHT_RINGS,
            radius: POINT_LIGHT_RADIUS,
            normals: SphereNormals::Discrete,
        }
    }
}

/// Parameters of the terrain grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid steps from the center to each edge
    pub half_extent: u32,
    /// World-space span the separation is derived from
    pub range: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            half_extent: TERRAIN_HALF_EXTENT,
            range: TERRAIN_RANGE,
        }
    }
}

/// Full scene configuration. Missing sections fall back to the demo presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Directional-light arrow
    pub arrow: ArrowConfig,
    /// Point-light marker sphere
    pub point_light: PointLightConfig,
    /// Terrain grid
    pub terrain: TerrainConfig,
}

impl SceneConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(source: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Meshes of the demo scene, ready for upload.
#[derive(Debug, Clone)]
pub struct SceneMeshes {
    /// Shaft and head merged into one solid
    pub arrow: Mesh<SolidVertex>,
    /// Point-light marker sphere
    pub point_light: Mesh<SolidVertex>,
    /// Terrain lattice and its separation
    pub terrain: GridMesh,
}

/// Builds a single arrow mesh: a shaft centered on the origin topped by a cone.
///
/// The origin is the pivot [`orientation::model_matrix`] rotates about. The
/// shaft spans `±shaft_length / 2` along Y, the head's base sits at
/// `shaft_length / 2` and the tip at `shaft_length / 2 + head_length`.
///
/// [`orientation::model_matrix`]: crate::orientation::model_matrix
pub fn build_arrow(config: &ArrowConfig) -> MeshResult<Mesh<SolidVertex>> {
    let (shaft, head) = rayon::join(
        || {
            create_cylinder(
                config.segments,
                config.shaft_radius,
                config.shaft_length,
                config.shading,
            )
        },
        || {
            create_cone(
                config.segments,
                config.head_radius,
                config.head_length,
                config.shading,
            )
        },
    );

    let mut arrow = shaft?;
    let mut head = head?;
    head.translate(Vec3::new(0.0, config.shaft_length / 2.0, 0.0));
    arrow.merge(&head);

    Ok(arrow)
}

/// Builds every mesh of the scene. The generators are independent and run in parallel.
pub fn build_scene(config: &SceneConfig) -> MeshResult<SceneMeshes> {
    let light = &config.point_light;
    let terrain = &config.terrain;

    let (arrow, (point_light, terrain)) = rayon::join(
        || build_arrow(&config.arrow),
        || {
            rayon::join(
                || create_sphere(light.segments, light.rings, light.radius, light.normals),
                || create_grid(terrain.half_extent, terrain.range),
            )
        },
    );

    let scene = SceneMeshes {
        arrow: arrow?,
        point_light: point_light?,
        terrain: terrain?,
    };

    tracing::info!(
        arrow_vertices = scene.arrow.vertex_count(),
        point_light_vertices = scene.point_light.vertex_count(),
        terrain_vertices = scene.terrain.mesh.vertex_count(),
        separation = scene.terrain.separation,
        "built scene meshes"
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::primitives::{cone_counts, cylinder_counts};
    use crate::vertex::Vertex;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_uses_presets() {
        let config = SceneConfig::default();
        assert_eq!(config.arrow.segments, 16);
        assert_eq!(config.point_light.rings, 16);
        assert_eq!(config.terrain.half_extent, 500);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SceneConfig::from_json(
            r#"{ "arrow": { "shading": "smooth" }, "point_light": { "normals": "analytic" } }"#,
        )
        .unwrap();
        assert_eq!(config.arrow.shading, Shading::Smooth);
        assert_eq!(config.arrow.segments, ARROW_SEGMENTS);
        assert_eq!(config.point_light.normals, SphereNormals::Analytic);
        assert_eq!(config.terrain, TerrainConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            SceneConfig::from_json("{ not json"),
            Err(MeshError::SceneConfig(_))
        ));
    }

    #[test]
    fn test_build_arrow() {
        let config = ArrowConfig::default();
        let arrow = build_arrow(&config).unwrap();

        let shaft = cylinder_counts(config.segments);
        let head = cone_counts(config.segments);
        assert_eq!(arrow.vertex_count(), shaft.vertices + head.vertices);
        assert_eq!(arrow.index_count(), shaft.indices + head.indices);
        assert!(arrow.validate().is_ok());

        let half = config.shaft_length / 2.0;
        let (min, max) = arrow.bounding_box();
        assert_relative_eq!(min.y, -half, epsilon = 1e-6);
        assert_relative_eq!(max.y, half + config.head_length, epsilon = 1e-6);

        // Head apex comes right after the shaft vertices, base center after it
        let apex = arrow.vertices()[shaft.vertices].position();
        assert_relative_eq!(apex.y, 0.14, epsilon = 1e-6);
        let base = arrow.vertices()[shaft.vertices + 1].position();
        assert_relative_eq!(base.y, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_build_arrow_pivots_on_shaft_center() {
        let config = ArrowConfig::default();
        let mut arrow = build_arrow(&config).unwrap();
        let (min_before, max_before) = arrow.bounding_box();

        // Flipping about the pivot maps the shaft onto itself
        arrow.transform(&crate::orientation::model_matrix(Vec3::ZERO, Vec3::NEG_Y));
        let (min, max) = arrow.bounding_box();
        assert_relative_eq!(max.y, -min_before.y, epsilon = 1e-6);
        assert_relative_eq!(min.y, -max_before.y, epsilon = 1e-6);
    }

    #[test]
    fn test_build_scene_small() {
        let config = SceneConfig {
            terrain: TerrainConfig {
                half_extent: 4,
                range: 1.0,
            },
            ..SceneConfig::default()
        };
        let scene = build_scene(&config).unwrap();
        assert_eq!(scene.point_light.vertex_count(), 2 + 32 * 15);
        assert_eq!(scene.terrain.mesh.vertex_count(), 81);
        assert_eq!(scene.terrain.separation, 1.0 / 9.0);
    }

    #[test]
    fn test_build_scene_propagates_errors() {
        let config = SceneConfig {
            point_light: PointLightConfig {
                rings: 1,
                ..PointLightConfig::default()
            },
            terrain: TerrainConfig {
                half_extent: 2,
                range: 1.0,
            },
            ..SceneConfig::default()
        };
        assert!(matches!(
            build_scene(&config),
            Err(MeshError::InvalidParameter { parameter: "rings", .. })
        ));
    }
}
