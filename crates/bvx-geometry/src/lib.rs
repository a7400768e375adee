//! Face-visibility solving and renderer-LUT-driven index buffer expansion
//! for [`bvx_core::VoxelChunk`]s.
//!
//! This crate has no opinion on vertex positions, attributes, or materials —
//! it answers two questions: which of a bitvoxel's faces are exposed
//! ([`VoxelFaceGeometry`]), and how to turn a solved mask into triangle
//! indices given a renderer's own local-index layout ([`BVXGeometry`]).

pub mod face_direction;
pub mod face_geometry;
pub mod index_expander;
pub mod neighborhood;
pub mod visible_faces;

pub use face_direction::FaceDirection;
pub use face_geometry::VoxelFaceGeometry;
pub use index_expander::{BVXGeometry, GeometryError};
pub use neighborhood::ChunkNeighborhood;
pub use visible_faces::VisibleFaces;
