//! Cross-chunk neighbor access for face visibility at chunk boundaries.

use std::sync::LazyLock;

use bvx_core::{MetaWidth, MortonKey, SpatialKey, VoxelChunk, VoxelIndex, VoxelWorld};

use crate::face_direction::FaceDirection;

/// An all-empty chunk substituted for any neighbor that isn't loaded.
///
/// Mirrors the zero-chunk pattern the source uses for its "air" neighbor
/// default: rather than threading `Option<&VoxelChunk>` through every
/// boundary lookup, an absent neighbor is this shared empty chunk, so
/// [`ChunkNeighborhood::neighbor`] can return a plain `&VoxelChunk`.
static ZERO_CHUNK: LazyLock<VoxelChunk> =
    LazyLock::new(|| VoxelChunk::new(MortonKey::from_xyz(0, 0, 0), MetaWidth::None));

/// Provides access to the six face-adjacent chunks of a chunk being solved
/// for face visibility.
///
/// A chunk spans 16 bitvoxels per axis. When a boundary lookup's coordinate
/// falls outside `[0, 16)` on exactly one axis, [`ChunkNeighborhood::get`]
/// routes it to the matching neighbor's wrapped-around coordinate. Neighbors
/// that were never set read as [`ZERO_CHUNK`] (all bits clear).
pub struct ChunkNeighborhood<'a> {
    neighbors: [&'a VoxelChunk; 6],
}

const CHUNK_EXTENT: i32 = 16;

impl<'a> ChunkNeighborhood<'a> {
    /// Creates a neighborhood where every side is unloaded (reads as empty).
    pub fn empty() -> Self {
        Self { neighbors: [&ZERO_CHUNK; 6] }
    }

    /// Sets the neighbor chunk in the given direction.
    pub fn set(&mut self, direction: FaceDirection, chunk: &'a VoxelChunk) {
        self.neighbors[direction.index()] = chunk;
    }

    /// Builds a neighborhood for the chunk at `key` by looking up its six
    /// axis-adjacent chunks in `world`, per `spec.md` §4.9 step 3: the
    /// neighbor key in each direction is `key`'s own Morton key with that
    /// axis's `inc`/`dec` applied, and any neighbor not resident in `world`
    /// reads as the zero chunk.
    pub fn from_world(world: &'a VoxelWorld, key: MortonKey) -> Self {
        let mut n = Self::empty();
        n.set_if_resident(world, FaceDirection::PosX, key.inc_x());
        n.set_if_resident(world, FaceDirection::NegX, key.dec_x());
        n.set_if_resident(world, FaceDirection::PosY, key.inc_y());
        n.set_if_resident(world, FaceDirection::NegY, key.dec_y());
        n.set_if_resident(world, FaceDirection::PosZ, key.inc_z());
        n.set_if_resident(world, FaceDirection::NegZ, key.dec_z());
        n
    }

    fn set_if_resident(&mut self, world: &'a VoxelWorld, direction: FaceDirection, neighbor_key: MortonKey) {
        if let Some(chunk) = world.get_chunk(neighbor_key) {
            self.set(direction, chunk);
        }
    }

    /// Returns the neighbor chunk in the given direction (the zero chunk if
    /// unset).
    pub fn neighbor(&self, direction: FaceDirection) -> &'a VoxelChunk {
        self.neighbors[direction.index()]
    }

    /// Reads the bit at a coordinate that has fallen outside `[0, 16)` on
    /// exactly one axis, routing to the matching neighbor's wrapped-around
    /// coordinate. Callers handle in-range coordinates themselves by reading
    /// the chunk being solved directly.
    ///
    /// # Panics
    ///
    /// Panics if zero or more than one axis is out of range — this only
    /// ever serves single-step face probes, never edges or corners.
    pub fn get(&self, x: i32, y: i32, z: i32) -> bool {
        let out_of_range = |v: i32| v < 0 || v >= CHUNK_EXTENT;
        let wrap = |v: i32| v.rem_euclid(CHUNK_EXTENT) as u32;

        match (out_of_range(x), out_of_range(y), out_of_range(z)) {
            (true, false, false) => {
                let dir = if x < 0 { FaceDirection::NegX } else { FaceDirection::PosX };
                self.neighbors[dir.index()].get_bit(VoxelIndex::from_local(wrap(x), y as u32, z as u32))
            }
            (false, true, false) => {
                let dir = if y < 0 { FaceDirection::NegY } else { FaceDirection::PosY };
                self.neighbors[dir.index()].get_bit(VoxelIndex::from_local(x as u32, wrap(y), z as u32))
            }
            (false, false, true) => {
                let dir = if z < 0 { FaceDirection::NegZ } else { FaceDirection::PosZ };
                self.neighbors[dir.index()].get_bit(VoxelIndex::from_local(x as u32, y as u32, wrap(z)))
            }
            _ => panic!("ChunkNeighborhood::get expects exactly one axis out of range, got ({x}, {y}, {z})"),
        }
    }
}
