//! Geometry providers: CPU mesh data for the unit primitives the scene is
//! assembled from.

pub mod mesh;
pub mod primitives;

pub use mesh::{MeshData, MeshVertex};
