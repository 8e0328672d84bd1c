//! # Sphere Primitive
//!
//! Generates a UV sphere with explicit pole vertices.

use crate::error::{check_positive, check_segments, check_vertex_budget, MeshError, MeshResult};
use crate::mesh::{Mesh, MeshCounts};
use crate::primitives::unit_normal;
use crate::vertex::SolidVertex;
use config::constants::MIN_RINGS;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// How sphere vertex normals are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SphereNormals {
    /// Four-neighbour estimate from the surrounding grid vertices.
    ///
    /// Keeps the demo renderer's lighting bit for bit.
    #[default]
    Discrete,
    /// `normalize(position)`.
    Analytic,
}

/// Returns the exact buffer sizes of a sphere.
///
/// `rings - 1` latitude rings of `segments` vertices sit between the poles.
pub fn sphere_counts(segments: u32, rings: u32) -> MeshCounts {
    let s = segments as usize;
    let r = rings.saturating_sub(1) as usize;
    MeshCounts {
        vertices: s.saturating_mul(r).saturating_add(2),
        indices: s.saturating_mul(r).saturating_mul(6),
    }
}

/// Creates a UV sphere mesh centered at the origin.
///
/// # Arguments
///
/// * `segments` - Longitude divisions (at least 3)
/// * `rings` - Latitude divisions, poles excluded (at least 2)
/// * `radius` - Sphere radius
/// * `normals` - Normal estimation method
///
/// # Algorithm
///
/// Vertex 0 is the top pole `(0, r, 0)` and vertex 1 the bottom pole. Ring
/// `i` (0-based) and segment `j` follow in row-major order at index
/// `2 + i·segments + j`, with polar angle `φ = (i + 1)·π / rings` and azimuth
/// `θ = j / segments · 2π`:
///
/// ```text
/// (r·sinφ·cosθ, r·cosφ, r·sinφ·sinθ)
/// ```
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{create_sphere, SphereNormals};
///
/// let mesh = create_sphere(32, 16, 1.0, SphereNormals::Discrete).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 + 32 * 15);
/// ```
pub fn create_sphere(
    segments: u32,
    rings: u32,
    radius: f32,
    normals: SphereNormals,
) -> MeshResult<Mesh<SolidVertex>> {
    check_segments(segments)?;
    if rings < MIN_RINGS {
        return Err(MeshError::invalid_parameter(
            "rings",
            format!("must be at least {}: {}", MIN_RINGS, rings),
        ));
    }
    check_positive("radius", radius)?;

    let counts = sphere_counts(segments, rings);
    check_vertex_budget(counts.vertices)?;

    let s = segments as usize;
    let ring_count = (rings - 1) as usize;

    // Ring positions, indexed by ring * segments + segment
    let mut grid = Vec::with_capacity(s * ring_count);
    for i in 0..ring_count {
        let phi = (i + 1) as f32 * PI / rings as f32;
        for j in 0..s {
            let theta = (j as f32 / segments as f32) * 2.0 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let (sin_phi, cos_phi) = phi.sin_cos();
            grid.push(Vec3::new(
                radius * cos_theta * sin_phi,
                radius * cos_phi,
                radius * sin_theta * sin_phi,
            ));
        }
    }

    let top_pole = Vec3::new(0.0, radius, 0.0);
    let bottom_pole = Vec3::new(0.0, -radius, 0.0);

    let mut mesh = Mesh::with_counts(counts);
    mesh.push_vertex(SolidVertex::new(top_pole, Vec3::Y));
    mesh.push_vertex(SolidVertex::new(bottom_pole, Vec3::NEG_Y));

    for i in 0..ring_count {
        for j in 0..s {
            let vertex = grid[i * s + j];
            let normal = match normals {
                SphereNormals::Analytic => unit_normal(vertex)?,
                SphereNormals::Discrete => {
                    let left = grid[i * s + (s + j - 1) % s];
                    let right = grid[i * s + (j + 1) % s];
                    let up = if i == 0 { top_pole } else { grid[(i - 1) * s + j] };
                    let down = if i + 1 == ring_count {
                        bottom_pole
                    } else {
                        grid[(i + 1) * s + j]
                    };
                    four_neighbour_normal(vertex, left, right, up, down)?
                }
            };
            mesh.push_vertex(SolidVertex::new(vertex, normal));
        }
    }

    let last_ring = (rings - 2) * segments;
    let at = |ring_offset: u32, j: u32| 2 + ring_offset + j;

    // Pole caps
    for j in 0..segments {
        let next = (j + 1) % segments;
        mesh.push_triangle(0, at(0, next), at(0, j));
        mesh.push_triangle(1, at(last_ring, j), at(last_ring, next));
    }

    // Bands between consecutive rings
    for i in 0..rings - 2 {
        let upper = i * segments;
        let lower = upper + segments;
        for j in 0..segments {
            let next = (j + 1) % segments;
            mesh.push_triangle(at(upper, j), at(upper, next), at(lower, j));
            mesh.push_triangle(at(lower, j), at(upper, next), at(lower, next));
        }
    }

    tracing::debug!(
        segments,
        rings,
        radius,
        ?normals,
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "generated sphere"
    );

    Ok(mesh)
}

/// Sums the cross products of the four triangles fanning around `vertex`.
fn four_neighbour_normal(
    vertex: Vec3,
    left: Vec3,
    right: Vec3,
    up: Vec3,
    down: Vec3,
) -> MeshResult<Vec3> {
    let (l, r, u, d) = (left - vertex, right - vertex, up - vertex, down - vertex);
    unit_normal(l.cross(u) + u.cross(r) + r.cross(d) + d.cross(l))
}
