//! # Vertex Records
//!
//! Interleaved vertex layouts handed to the GPU upload routine.
//!
//! Every record is tightly packed `f32` data, so a whole vertex buffer can be
//! viewed as `&[f32]` or `&[u8]` without copying.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// One attribute inside an interleaved vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader attribute location
    pub location: u32,
    /// Number of `f32` components
    pub components: u32,
    /// Byte offset from the start of the record
    pub offset: usize,
}

/// Byte layout of an interleaved vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Size of one record in bytes
    pub stride: usize,
    /// Attributes in location order
    pub attributes: &'static [VertexAttribute],
}

impl VertexLayout {
    /// Number of `f32` scalars in one record.
    pub const fn components(&self) -> usize {
        self.stride / std::mem::size_of::<f32>()
    }
}

/// A vertex record that can be uploaded as-is.
pub trait Vertex: Pod {
    /// Attribute layout of this record type.
    const LAYOUT: VertexLayout;

    /// Position of the vertex in 3D (2D records lie in the z = 0 plane).
    fn position(&self) -> Vec3;
}

/// Position + normal record used by the 3D solids.
///
/// Layout: `[px, py, pz, nx, ny, nz]`, stride 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SolidVertex {
    /// Object-space position
    pub position: [f32; 3],
    /// Unit normal
    pub normal: [f32; 3],
}

impl SolidVertex {
    /// Creates a record from position and normal vectors.
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    /// Returns the normal vector.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

impl Vertex for SolidVertex {
    const LAYOUT: VertexLayout = VertexLayout {
        stride: std::mem::size_of::<SolidVertex>(),
        attributes: &[
            VertexAttribute {
                location: 0,
                components: 3,
                offset: 0,
            },
            VertexAttribute {
                location: 1,
                components: 3,
                offset: 3 * std::mem::size_of::<f32>(),
            },
        ],
    };

    #[inline]
    fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Position-only record used by the planar grid.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    /// Position in the grid plane
    pub position: [f32; 2],
}

impl GridVertex {
    /// Creates a record from a 2D position.
    #[inline]
    pub fn new(position: Vec2) -> Self {
        Self {
            position: position.to_array(),
        }
    }
}

impl Vertex for GridVertex {
    const LAYOUT: VertexLayout = VertexLayout {
        stride: std::mem::size_of::<GridVertex>(),
        attributes: &[VertexAttribute {
            location: 0,
            components: 2,
            offset: 0,
        }],
    };

    #[inline]
    fn position(&self) -> Vec3 {
        Vec2::from_array(self.position).extend(0.0)
    }
}
