//! Bit-packed sparse voxel storage.
//!
//! A world is a hash grid of chunks; each chunk is a 4×4×4 grid of voxels,
//! each voxel a 4×4×4 grid of single-bit "bitvoxels" (4096 bits per chunk in
//! a 16×16×16 logical volume) plus an optional per-voxel metadata word.

pub mod bit_array;
pub mod bit_ops;
pub mod bvx_layer;
pub mod error;
pub mod hash_grid;
pub mod linear_key;
pub mod morton_key;
pub mod raycaster;
pub mod spatial_key;
pub mod voxel_chunk;
pub mod voxel_index;
pub mod voxel_world;
pub mod world_index;

pub use bit_array::BitArray;
pub use error::BvxError;
pub use hash_grid::HashGrid;
pub use linear_key::LinearKey;
pub use morton_key::MortonKey;
pub use raycaster::VoxelRaycaster;
pub use spatial_key::SpatialKey;
pub use voxel_chunk::{MetaWidth, VoxelChunk};
pub use voxel_index::VoxelIndex;
pub use voxel_world::VoxelWorld;
pub use world_index::WorldIndex;
