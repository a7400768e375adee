//! [`WorldIndex`]: the address of a single bitvoxel in world space.
//!
//! World coordinates are integer bitvoxel units. Each chunk spans 16 units
//! per axis (4 voxels × 4 bitvoxels), so a world coordinate decomposes into
//! a chunk coordinate (floor division by 16) and a local coordinate (modulo
//! 16), which in turn splits into a voxel coordinate and a bitvoxel
//! coordinate (div/mod 4). Floor division, not truncation, is used so
//! negative world coordinates decompose the same way positive ones do.

use crate::morton_key::MortonKey;
use crate::spatial_key::SpatialKey;
use crate::voxel_index::VoxelIndex;

/// Bitvoxels per chunk, per axis.
const CHUNK_EXTENT: i64 = 16;
/// Bitvoxels per voxel, per axis.
const VOXEL_EXTENT: i64 = 4;
/// Chunk axis keys wrap modulo this, matching [`crate::spatial_key::AXIS_RANGE`].
const CHUNK_AXIS_RANGE: i64 = 1024;

/// A world-space bitvoxel address, decomposed into its owning chunk and a
/// chunk-local sub-index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldIndex {
    chunk: MortonKey,
    voxel: VoxelIndex,
}

fn wrap_chunk_axis(v: i64) -> u32 {
    v.rem_euclid(CHUNK_AXIS_RANGE) as u32
}

impl WorldIndex {
    /// Decomposes a world-space bitvoxel coordinate into a chunk key and a
    /// local [`VoxelIndex`].
    pub fn from_world(wx: i64, wy: i64, wz: i64) -> Self {
        let chunk_x = wx.div_euclid(CHUNK_EXTENT);
        let chunk_y = wy.div_euclid(CHUNK_EXTENT);
        let chunk_z = wz.div_euclid(CHUNK_EXTENT);

        let local_x = wx.rem_euclid(CHUNK_EXTENT);
        let local_y = wy.rem_euclid(CHUNK_EXTENT);
        let local_z = wz.rem_euclid(CHUNK_EXTENT);

        let voxel = VoxelIndex::new(
            (local_x.div_euclid(VOXEL_EXTENT)) as u32,
            (local_y.div_euclid(VOXEL_EXTENT)) as u32,
            (local_z.div_euclid(VOXEL_EXTENT)) as u32,
            (local_x.rem_euclid(VOXEL_EXTENT)) as u32,
            (local_y.rem_euclid(VOXEL_EXTENT)) as u32,
            (local_z.rem_euclid(VOXEL_EXTENT)) as u32,
        );

        Self {
            chunk: MortonKey::from_xyz(
                wrap_chunk_axis(chunk_x),
                wrap_chunk_axis(chunk_y),
                wrap_chunk_axis(chunk_z),
            ),
            voxel,
        }
    }

    /// Builds a `WorldIndex` directly from a chunk key and a local voxel
    /// index.
    pub fn new(chunk: MortonKey, voxel: VoxelIndex) -> Self {
        Self { chunk, voxel }
    }

    /// The owning chunk's key.
    pub fn chunk(&self) -> MortonKey {
        self.chunk
    }

    /// The chunk-local bitvoxel index.
    pub fn voxel(&self) -> VoxelIndex {
        self.voxel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_chunk_zero() {
        let idx = WorldIndex::from_world(0, 0, 0);
        assert_eq!(idx.chunk(), MortonKey::from_xyz(0, 0, 0));
        assert_eq!((idx.voxel().vx(), idx.voxel().bx()), (0, 0));
    }

    #[test]
    fn coordinate_within_first_chunk_decomposes_correctly() {
        let idx = WorldIndex::from_world(5, 9, 15);
        assert_eq!(idx.chunk(), MortonKey::from_xyz(0, 0, 0));
        // 5 = voxel 1, bit 1; 9 = voxel 2, bit 1; 15 = voxel 3, bit 3
        assert_eq!(idx.voxel().vx(), 1);
        assert_eq!(idx.voxel().bx(), 1);
        assert_eq!(idx.voxel().vy(), 2);
        assert_eq!(idx.voxel().by(), 1);
        assert_eq!(idx.voxel().vz(), 3);
        assert_eq!(idx.voxel().bz(), 3);
    }

    #[test]
    fn coordinate_past_chunk_boundary_rolls_to_next_chunk() {
        let idx = WorldIndex::from_world(16, 0, 0);
        assert_eq!(idx.chunk(), MortonKey::from_xyz(1, 0, 0));
        assert_eq!(idx.voxel().vx(), 0);
    }

    #[test]
    fn negative_world_coordinates_floor_divide_not_truncate() {
        // -1 should land in chunk -1 (wrapped), local coordinate 15, not
        // chunk 0 with a negative local coordinate.
        let idx = WorldIndex::from_world(-1, -1, -1);
        assert_eq!(idx.chunk(), MortonKey::from_xyz(1023, 1023, 1023));
        assert_eq!(idx.voxel().vx(), 3);
        assert_eq!(idx.voxel().bx(), 3);
    }

    #[test]
    fn negative_chunk_coordinates_wrap_into_axis_range() {
        let idx = WorldIndex::from_world(-16, 0, 0);
        assert_eq!(idx.chunk(), MortonKey::from_xyz(1023, 0, 0));
    }
}
