//! # Cone Primitive
//!
//! Generates a cone standing on the XZ plane with its apex on +Y.

use super::{ring_table, unit_normal};
use crate::error::{check_positive, check_segments, check_vertex_budget, MeshResult};
use crate::mesh::{Mesh, MeshCounts};
use crate::shading::Shading;
use crate::vertex::SolidVertex;
use glam::Vec3;

/// Returns the exact buffer sizes of a cone with `segments` base vertices.
pub fn cone_counts(segments: u32) -> MeshCounts {
    let n = segments as usize;
    MeshCounts {
        vertices: n + 2,
        indices: 6 * n,
    }
}

/// Creates a capped cone mesh.
///
/// # Arguments
///
/// * `segments` - Number of base ring vertices (at least 3)
/// * `radius` - Base radius
/// * `height` - Apex height above the base
/// * `shading` - Side-normal mode
///
/// # Algorithm
///
/// Vertex 0 is the apex, vertex 1 the base center, followed by the base ring
/// at `y = 0`. Each ring normal averages the two lateral faces meeting at the
/// vertex:
///
/// ```text
/// n = normalize((prev - v) × (apex - v) + (apex - v) × (next - v) + (0, -2·k, 0))
/// ```
///
/// where `k` is [`Shading::bias_factor`].
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{create_cone, Shading};
///
/// let mesh = create_cone(16, 0.02, 0.04, Shading::Faceted).unwrap();
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.index_count(), 96);
/// ```
pub fn create_cone(
    segments: u32,
    radius: f32,
    height: f32,
    shading: Shading,
) -> MeshResult<Mesh<SolidVertex>> {
    check_segments(segments)?;
    check_positive("radius", radius)?;
    check_positive("height", height)?;

    let counts = cone_counts(segments);
    check_vertex_budget(counts.vertices)?;

    let n = segments as usize;
    let apex = Vec3::new(0.0, height, 0.0);
    let bias = Vec3::new(0.0, -2.0 * shading.bias_factor(), 0.0);
    let ring: Vec<Vec3> = ring_table(segments, radius)
        .into_iter()
        .map(|p| Vec3::new(p.x, 0.0, p.y))
        .collect();

    let mut mesh = Mesh::with_counts(counts);
    mesh.push_vertex(SolidVertex::new(apex, Vec3::Y));
    mesh.push_vertex(SolidVertex::new(Vec3::ZERO, Vec3::NEG_Y));

    for i in 0..n {
        let vertex = ring[i];
        let previous = ring[(n + i - 1) % n];
        let next = ring[(i + 1) % n];

        let normal = unit_normal(
            (previous - vertex).cross(apex - vertex) + (apex - vertex).cross(next - vertex) + bias,
        )?;

        mesh.push_vertex(SolidVertex::new(vertex, normal));
    }

    let ring_index = |i: u32| 2 + i;
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.push_triangle(0, ring_index(next), ring_index(i));
        mesh.push_triangle(1, ring_index(i), ring_index(next));
    }

    tracing::debug!(
        segments,
        radius,
        height,
        ?shading,
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "generated cone"
    );

    Ok(mesh)
}
