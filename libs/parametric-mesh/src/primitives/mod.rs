//! # Primitives
//!
//! Mesh generation for the parametric primitives (cylinder, cone, sphere, grid).
//!
//! Every generator is a pure function: parameters in, freshly allocated
//! buffers out. Solids are wound counter-clockwise as seen from outside, and
//! ring vertices start at angle 0 on the +X axis and advance toward +Z.

pub mod cone;
pub mod cylinder;
pub mod grid;
pub mod sphere;

pub use cone::{cone_counts, create_cone};
pub use cylinder::{create_cylinder, cylinder_counts};
pub use grid::{create_grid, grid_counts, GridMesh};
pub use sphere::{create_sphere, sphere_counts, SphereNormals};

use crate::error::{MeshError, MeshResult};
use config::constants::{is_unit_length, NORMAL_TOLERANCE};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Precomputes `(r·cos θ, r·sin θ)` for `segments` angles evenly spaced over `[0, 2π)`.
///
/// The x component maps to world X and the y component to world Z.
pub(crate) fn ring_table(segments: u32, radius: f32) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Normalizes a vertex normal, failing when the result is not unit length.
///
/// Catches vectors whose squared length underflows to zero or overflows
/// to infinity in `f32`.
pub(crate) fn unit_normal(vector: Vec3) -> MeshResult<Vec3> {
    match vector.try_normalize() {
        Some(normal) if is_unit_length(normal.length(), NORMAL_TOLERANCE) => Ok(normal),
        _ => Err(MeshError::validation(format!(
            "cannot normalize {} to a unit normal",
            vector
        ))),
    }
}

/// Asserts that every triangle faces away from `interior`.
#[cfg(test)]
pub(crate) fn assert_outward(mesh: &crate::Mesh<crate::SolidVertex>, interior: glam::Vec3) {
    use crate::Vertex;

    let vertices = mesh.vertices();
    for (i, [a, b, c]) in mesh.triangles().enumerate() {
        let pa = vertices[a as usize].position();
        let pb = vertices[b as usize].position();
        let pc = vertices[c as usize].position();
        let face_normal = (pb - pa).cross(pc - pa);
        let centroid = (pa + pb + pc) / 3.0;
        assert!(
            face_normal.dot(centroid - interior) > 0.0,
            "triangle {} [{}, {}, {}] faces inward",
            i,
            a,
            b,
            c
        );
    }
}
