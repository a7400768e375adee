//! [`VoxelFaceGeometry`]: the per-bitvoxel face-visibility solver.

use bvx_core::{MortonKey, VoxelChunk, VoxelIndex, VoxelWorld};

use crate::face_direction::FaceDirection;
use crate::neighborhood::ChunkNeighborhood;
use crate::visible_faces::VisibleFaces;

const CHUNK_EXTENT: i32 = 16;

/// Solves the 6-bit face-visibility mask for every bitvoxel in a chunk.
///
/// A face is visible exactly when the bitvoxel itself is set and its
/// neighbor in that direction is clear. There is only one "material" —
/// set or unset — so, unlike a typed-voxel mesher, there is no
/// transparency/same-type bookkeeping: visibility is pure solid/air
/// adjacency.
pub struct VoxelFaceGeometry;

impl VoxelFaceGeometry {
    /// Computes the visible-face mask for every bitvoxel in `chunk`,
    /// reading across chunk boundaries through `neighbors`.
    ///
    /// Returns a `Vec` of length 4096, indexed by [`VoxelIndex::index`].
    pub fn solve(chunk: &VoxelChunk, neighbors: &ChunkNeighborhood) -> Vec<VisibleFaces> {
        let mut result = vec![VisibleFaces::NONE; 4096];

        for x in 0..CHUNK_EXTENT {
            for y in 0..CHUNK_EXTENT {
                for z in 0..CHUNK_EXTENT {
                    let index = VoxelIndex::from_local(x as u32, y as u32, z as u32);
                    if !chunk.get_bit(index) {
                        continue;
                    }

                    let mut faces = VisibleFaces::NONE;
                    for dir in FaceDirection::ALL {
                        let (nx, ny, nz) = dir.offset(x, y, z);
                        let neighbor_set = if (0..CHUNK_EXTENT).contains(&nx)
                            && (0..CHUNK_EXTENT).contains(&ny)
                            && (0..CHUNK_EXTENT).contains(&nz)
                        {
                            chunk.get_bit(VoxelIndex::from_local(nx as u32, ny as u32, nz as u32))
                        } else {
                            tracing::trace!(x = nx, y = ny, z = nz, ?dir, "reading across chunk boundary");
                            neighbors.get(nx, ny, nz)
                        };

                        if !neighbor_set {
                            faces.set_visible(dir);
                        }
                    }

                    result[index.index() as usize] = faces;
                }
            }
        }

        result
    }

    /// Sums [`VisibleFaces::count`] across a solved mask array.
    pub fn count_visible(faces: &[VisibleFaces]) -> u32 {
        faces.iter().map(|f| f.count()).sum()
    }

    /// Solves the chunk at `key` in `world`, looking its six neighbors up
    /// from the same world via [`ChunkNeighborhood::from_world`].
    ///
    /// Returns `None` if `world` has no chunk at `key` — there is nothing to
    /// solve faces for.
    pub fn solve_in_world(world: &VoxelWorld, key: MortonKey) -> Option<Vec<VisibleFaces>> {
        let chunk = world.get_chunk(key)?;
        let neighbors = ChunkNeighborhood::from_world(world, key);
        Some(Self::solve(chunk, &neighbors))
    }
}
