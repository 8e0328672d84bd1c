//! # Mesh Data Structure
//!
//! Owned vertex and index buffers produced by the generators.

use crate::error::{MeshError, MeshResult};
use crate::vertex::{SolidVertex, Vertex};
use config::constants::{is_unit_length, GlobalConfig};
use glam::{Mat4, Vec3};

/// Exact buffer sizes of a generator call, in records and indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshCounts {
    /// Number of vertex records
    pub vertices: usize,
    /// Number of `u32` indices (three per triangle)
    pub indices: usize,
}

/// A triangle mesh with an interleaved vertex buffer and a `u32` index buffer.
///
/// Every consecutive index triplet forms one triangle, wound
/// counter-clockwise as seen from the side the triangle faces.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{Mesh, SolidVertex};
/// use glam::Vec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push_vertex(SolidVertex::new(Vec3::ZERO, Vec3::Z));
/// mesh.push_vertex(SolidVertex::new(Vec3::X, Vec3::Z));
/// mesh.push_vertex(SolidVertex::new(Vec3::Y, Vec3::Z));
/// mesh.push_triangle(0, 1, 2);
/// assert_eq!(mesh.index_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<V> {
    vertices: Vec<V>,
    indices: Vec<u32>,
}

impl<V: Vertex> Default for Mesh<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Mesh<V> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Creates a mesh with buffers allocated for exactly `counts`.
    pub fn with_counts(counts: MeshCounts) -> Self {
        Self {
            vertices: Vec::with_capacity(counts.vertices),
            indices: Vec::with_capacity(counts.indices),
        }
    }

    /// Returns the number of vertex records.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of `f32` scalars in the interleaved vertex buffer.
    #[inline]
    pub fn float_count(&self) -> usize {
        self.vertices.len() * V::LAYOUT.components()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the buffer sizes of this mesh.
    pub fn counts(&self) -> MeshCounts {
        MeshCounts {
            vertices: self.vertices.len(),
            indices: self.indices.len(),
        }
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, vertex: V) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns a reference to the vertex records.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns a reference to the flat index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates over triangles as index triplets.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Consumes the mesh and returns its buffers.
    pub fn into_parts(self) -> (Vec<V>, Vec<u32>) {
        (self.vertices, self.indices)
    }

    /// Views the vertex buffer as interleaved `f32` scalars.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Views the vertex buffer as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Views the index buffer as raw bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut positions = self.vertices.iter().map(Vertex::position);
        let Some(first) = positions.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Reverses the winding of every triangle.
    ///
    /// Useful for pipelines that treat clockwise triangles as front-facing.
    pub fn flip_winding(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh<V>) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|index| index + offset));
    }

    /// Validates the index buffer.
    ///
    /// Checks:
    /// - The index count is a multiple of three
    /// - All indices reference an existing vertex
    /// - No triangle repeats a vertex
    pub fn validate(&self) -> MeshResult<()> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::validation(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let vertex_count = self.vertices.len() as u32;
        for (i, tri) in self.triangles().enumerate() {
            if let Some(bad) = tri.iter().find(|&&index| index >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "triangle {} references vertex {} of {}",
                    i, bad, vertex_count
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!(
                    "triangle {} is degenerate: {:?}",
                    i, tri
                )));
            }
        }

        Ok(())
    }
}

impl Mesh<SolidVertex> {
    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position = (v.position() + offset).to_array();
        }
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Normals go through the inverse transpose and are renormalized.
    pub fn transform(&mut self, matrix: &Mat4) {
        let normal_matrix = matrix.inverse().transpose();
        for v in &mut self.vertices {
            let position = matrix.transform_point3(v.position());
            let normal = normal_matrix.transform_vector3(v.normal()).normalize();
            *v = SolidVertex::new(position, normal);
        }
    }

    /// Checks that every normal has unit length within `tolerance`.
    pub fn validate_normals(&self, tolerance: f32) -> MeshResult<()> {
        for (i, v) in self.vertices.iter().enumerate() {
            let length = v.normal().length();
            if !is_unit_length(length, tolerance) {
                return Err(MeshError::validation(format!(
                    "normal of vertex {} has length {}",
                    i, length
                )));
            }
        }
        Ok(())
    }

    /// Runs every check against the shared configuration.
    pub fn validate_with(&self, config: &GlobalConfig) -> MeshResult<()> {
        if self.vertices.len() > config.max_vertices {
            return Err(MeshError::TooManyVertices {
                count: self.vertices.len(),
                max: config.max_vertices,
            });
        }
        self.validate()?;
        self.validate_normals(config.normal_tolerance)
    }
}
