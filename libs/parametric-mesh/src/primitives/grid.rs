//! # Grid Primitive
//!
//! Generates a flat square lattice of 2D positions centered at the origin.
//! The terrain shader displaces it, so no normals are produced.

use crate::error::{check_positive, check_vertex_budget, MeshError, MeshResult};
use crate::mesh::{Mesh, MeshCounts};
use crate::vertex::GridVertex;
use config::constants::MIN_GRID_HALF_EXTENT;
use glam::Vec2;

/// A planar grid together with its lattice spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    /// Position-only lattice mesh
    pub mesh: Mesh<GridVertex>,
    /// Distance between neighbouring lattice points, `range / (2·half_extent + 1)`.
    ///
    /// Consumed by the terrain shader as its tiling factor.
    pub separation: f32,
}

impl GridMesh {
    /// Number of lattice points along one side.
    pub fn side(&self) -> usize {
        (self.mesh.vertex_count() as f64).sqrt().round() as usize
    }
}

/// Returns the exact buffer sizes of a grid with `half_extent` steps per side.
pub fn grid_counts(half_extent: u32) -> MeshCounts {
    let side = 2 * half_extent as usize + 1;
    let cells = (side - 1).saturating_mul(side - 1);
    MeshCounts {
        vertices: side.saturating_mul(side),
        indices: cells.saturating_mul(6),
    }
}

/// Creates a grid mesh.
///
/// # Arguments
///
/// * `half_extent` - Grid steps from the center to an edge (at least 1)
/// * `range` - Total world-space span used to derive the separation
///
/// # Layout
///
/// Vertices are row-major: row `i`, column `j` lives at `i·side + j` with
/// position `separation · (j - half_extent, half_extent - i)`, so rows run
/// from +Y down to -Y. Each cell is split into two triangles wound
/// counter-clockwise as seen from +Z. The grid is bounded; there is no
/// wraparound.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::create_grid;
///
/// let grid = create_grid(1, 2.0).unwrap();
/// assert_eq!(grid.mesh.vertex_count(), 9);
/// assert_eq!(grid.mesh.triangle_count(), 8);
/// assert_eq!(grid.separation, 2.0 / 3.0);
/// ```
pub fn create_grid(half_extent: u32, range: f32) -> MeshResult<GridMesh> {
    if half_extent < MIN_GRID_HALF_EXTENT {
        return Err(MeshError::invalid_parameter(
            "half_extent",
            format!("must be at least {}: {}", MIN_GRID_HALF_EXTENT, half_extent),
        ));
    }
    check_positive("range", range)?;

    let counts = grid_counts(half_extent);
    check_vertex_budget(counts.vertices)?;

    let side = 2 * half_extent + 1;
    let separation = range / side as f32;
    let half = half_extent as i64;

    let mut mesh = Mesh::with_counts(counts);
    for i in 0..side as i64 {
        for j in 0..side as i64 {
            let lattice = Vec2::new((j - half) as f32, (half - i) as f32);
            mesh.push_vertex(GridVertex::new(separation * lattice));
        }
    }

    for i in 0..side - 1 {
        for j in 0..side - 1 {
            let top_left = i * side + j;
            let bottom_left = top_left + side;
            mesh.push_triangle(top_left, bottom_left, top_left + 1);
            mesh.push_triangle(top_left + 1, bottom_left, bottom_left + 1);
        }
    }

    tracing::debug!(
        half_extent,
        range,
        separation,
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "generated grid"
    );

    Ok(GridMesh { mesh, separation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_counts() {
        for v in [1, 2, 10] {
            let grid = create_grid(v, 4.0).unwrap();
            let side = (2 * v + 1) as usize;
            assert_eq!(grid.mesh.counts(), grid_counts(v));
            assert_eq!(grid.mesh.vertex_count(), side * side);
            assert_eq!(grid.mesh.index_count(), 6 * (2 * v as usize).pow(2));
            assert_eq!(grid.mesh.float_count(), 2 * side * side);
            assert_eq!(grid.side(), side);
        }
    }

    #[test]
    fn test_grid_three_by_three() {
        let grid = create_grid(1, 2.0).unwrap();
        let third = 2.0f32 / 3.0;
        assert_eq!(grid.separation, third);

        let positions: Vec<[f32; 2]> = grid.mesh.vertices().iter().map(|v| v.position).collect();
        assert_eq!(positions[0], [-third, third]);
        assert_eq!(positions[4], [0.0, 0.0]);
        assert_eq!(positions[8], [third, -third]);

        let (min, max) = grid.mesh.bounding_box();
        assert_relative_eq!(min.x, -0.6666667, epsilon = 1e-6);
        assert_relative_eq!(max.y, 0.6666667, epsilon = 1e-6);
        assert_eq!(grid.mesh.triangle_count(), 8);
    }

    #[test]
    fn test_grid_first_cell() {
        let grid = create_grid(1, 2.0).unwrap();
        let tris: Vec<[u32; 3]> = grid.mesh.triangles().collect();
        assert_eq!(tris[0], [0, 3, 1]);
        assert_eq!(tris[1], [1, 3, 4]);
        // Last cell of the first row ends at the row edge, no wraparound
        assert_eq!(tris[3], [2, 4, 5]);
    }

    #[test]
    fn test_grid_winding_faces_positive_z() {
        let grid = create_grid(3, 1.0).unwrap();
        let v = grid.mesh.vertices();
        for [a, b, c] in grid.mesh.triangles() {
            let pa = v[a as usize].position();
            let pb = v[b as usize].position();
            let pc = v[c as usize].position();
            assert!((pb - pa).cross(pc - pa).z > 0.0);
        }
    }

    #[test]
    fn test_grid_validates() {
        let grid = create_grid(25, 5.0).unwrap();
        assert!(grid.mesh.validate().is_ok());
    }

    #[test]
    fn test_grid_invalid_parameters() {
        assert!(matches!(
            create_grid(0, 1.0),
            Err(MeshError::InvalidParameter { parameter: "half_extent", .. })
        ));
        assert!(create_grid(4, 0.0).is_err());
        assert!(create_grid(4, f32::INFINITY).is_err());
    }

    #[test]
    fn test_grid_vertex_budget() {
        assert!(matches!(
            create_grid(100_000, 1.0),
            Err(MeshError::TooManyVertices { .. })
        ));
    }
}
