//! # Cylinder Primitive
//!
//! Generates a capped cylinder centered at the origin with its axis along Y.

use super::{ring_table, unit_normal};
use crate::error::{check_positive, check_segments, check_vertex_budget, MeshResult};
use crate::mesh::{Mesh, MeshCounts};
use crate::shading::Shading;
use crate::vertex::SolidVertex;
use glam::Vec3;

/// Returns the exact buffer sizes of a cylinder with `segments` angular steps.
///
/// Two poles plus one top and one bottom ring vertex per step; four bands of
/// `segments` triangles (top fan, two side bands, bottom fan).
pub fn cylinder_counts(segments: u32) -> MeshCounts {
    let n = segments as usize;
    MeshCounts {
        vertices: 2 + 2 * n,
        indices: 12 * n,
    }
}

/// Creates a capped cylinder mesh.
///
/// # Arguments
///
/// * `segments` - Angular resolution (at least 3)
/// * `radius` - Radius of the shell
/// * `depth` - Axial length; the caps sit at `±depth / 2`
/// * `shading` - Side-normal mode
///
/// # Layout
///
/// Vertex 0 is the top pole and vertex 1 the bottom pole. Angular step `i`
/// then contributes its top ring vertex at `2 + 2i` and its bottom ring
/// vertex at `3 + 2i`.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{create_cylinder, Shading};
///
/// let mesh = create_cylinder(4, 1.0, 2.0, Shading::Faceted).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.index_count(), 48);
/// ```
pub fn create_cylinder(
    segments: u32,
    radius: f32,
    depth: f32,
    shading: Shading,
) -> MeshResult<Mesh<SolidVertex>> {
    check_segments(segments)?;
    check_positive("radius", radius)?;
    check_positive("depth", depth)?;

    let counts = cylinder_counts(segments);
    check_vertex_budget(counts.vertices)?;

    let half_depth = depth / 2.0;
    let factor = shading.bias_factor();
    let ring = ring_table(segments, radius);

    let mut mesh = Mesh::with_counts(counts);
    mesh.push_vertex(SolidVertex::new(Vec3::new(0.0, half_depth, 0.0), Vec3::Y));
    mesh.push_vertex(SolidVertex::new(
        Vec3::new(0.0, -half_depth, 0.0),
        Vec3::NEG_Y,
    ));

    for p in &ring {
        let top_normal = unit_normal(Vec3::new(p.x, factor, p.y))?;
        let bottom_normal = unit_normal(Vec3::new(p.x, -factor, p.y))?;

        mesh.push_vertex(SolidVertex::new(Vec3::new(p.x, half_depth, p.y), top_normal));
        mesh.push_vertex(SolidVertex::new(
            Vec3::new(p.x, -half_depth, p.y),
            bottom_normal,
        ));
    }

    let top = |i: u32| 2 + 2 * i;
    let bottom = |i: u32| 3 + 2 * i;

    // Top cap
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.push_triangle(0, top(next), top(i));
    }

    // Side
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.push_triangle(top(i), top(next), bottom(i));
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.push_triangle(bottom(i), top(next), bottom(next));
    }

    // Bottom cap
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.push_triangle(1, bottom(i), bottom(next));
    }

    tracing::debug!(
        segments,
        radius,
        depth,
        ?shading,
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "generated cylinder"
    );

    Ok(mesh)
}
