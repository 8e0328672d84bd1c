//! # Parametric Mesh
//!
//! Procedural mesh generation for the light-indicator demo: revolved solids,
//! a tessellated sphere and a planar terrain grid.
//!
//! ## Architecture
//!
//! ```text
//! parameters → primitives (cylinder, cone, sphere, grid) → Mesh<V> → GPU upload
//! ```
//!
//! Every generator is a pure function. It validates its parameters, allocates
//! exactly the buffer sizes its parameters imply and hands ownership of the
//! result to the caller. Generators share no state, so any number of them may
//! run concurrently.
//!
//! ## Buffers
//!
//! - Solids: interleaved `[position: 3 × f32, normal: 3 × f32]` records
//! - Grid: `[position: 2 × f32]` records plus the derived separation factor
//! - Indices: `u32` triplets, counter-clockwise as seen from outside
//!
//! ## Usage
//!
//! ```rust
//! use parametric_mesh::{create_cylinder, Shading};
//!
//! let mesh = create_cylinder(16, 0.01, 0.2, Shading::Faceted)?;
//! let floats: &[f32] = mesh.as_floats();
//! assert_eq!(floats.len(), mesh.float_count());
//! # Ok::<(), parametric_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod orientation;
pub mod primitives;
pub mod scene;
pub mod shading;
pub mod vertex;

pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, MeshCounts};
pub use primitives::{
    cone_counts, create_cone, create_cylinder, create_grid, create_sphere, cylinder_counts,
    grid_counts, sphere_counts, GridMesh, SphereNormals,
};
pub use shading::Shading;
pub use vertex::{GridVertex, SolidVertex, Vertex, VertexAttribute, VertexLayout};
