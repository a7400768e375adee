//! [`VoxelWorld`]: an unbounded sparse grid of [`VoxelChunk`]s.
//!
//! Chunks are created lazily on first write; a world coordinate whose chunk
//! was never created reads back as an unset bitvoxel rather than erroring —
//! the "absent" case is a sentinel, not a [`crate::BvxError`].

use crate::hash_grid::HashGrid;
use crate::morton_key::MortonKey;
use crate::raycaster::VoxelRaycaster;
use crate::spatial_key::SpatialKey;
use crate::voxel_chunk::{MetaWidth, VoxelChunk};
use crate::world_index::WorldIndex;

/// An unbounded sparse voxel world: a hash grid of chunks plus a bound
/// raycaster for line-of-sight queries against it.
///
/// The raycaster holds no reference back into the world — it takes `&self`
/// at call time in [`VoxelWorld::cast_ray`] — which sidesteps the cyclic
/// `World <-> Raycaster` ownership the legacy source had.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    chunks: HashGrid<MortonKey, VoxelChunk>,
    raycaster: VoxelRaycaster,
    default_meta_width: MetaWidth,
}

impl VoxelWorld {
    /// Creates an empty world. `bucket_count` sizes the underlying
    /// [`HashGrid`] (`0` uses its default); `default_meta_width` is the
    /// metadata width newly created chunks get.
    pub fn new(bucket_count: usize, default_meta_width: MetaWidth) -> Self {
        Self {
            chunks: HashGrid::new(bucket_count),
            raycaster: VoxelRaycaster::new(),
            default_meta_width,
        }
    }

    /// The number of chunks currently resident in the world.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the chunk at `key`, if one has been created.
    pub fn get_chunk(&self, key: MortonKey) -> Option<&VoxelChunk> {
        self.chunks.get(&key)
    }

    /// Returns a mutable reference to the chunk at `key`, if one has been
    /// created.
    pub fn get_chunk_mut(&mut self, key: MortonKey) -> Option<&mut VoxelChunk> {
        self.chunks.get_mut(&key)
    }

    /// Inserts `chunk` at its own key, replacing and returning any prior
    /// chunk there.
    pub fn insert_chunk(&mut self, chunk: VoxelChunk) -> Option<VoxelChunk> {
        let key = chunk.key();
        self.chunks.insert(key, chunk)
    }

    /// Removes and returns the chunk at `key`, if present.
    pub fn remove_chunk(&mut self, key: MortonKey) -> Option<VoxelChunk> {
        self.chunks.remove(&key)
    }

    /// Returns the chunk at `key`, creating an empty one at
    /// `default_meta_width` if none exists yet.
    pub fn get_or_create_chunk(&mut self, key: MortonKey) -> &mut VoxelChunk {
        if !self.chunks.contains(&key) {
            tracing::debug!(x = key.x(), y = key.y(), z = key.z(), "creating chunk");
            self.chunks.insert(key, VoxelChunk::new(key, self.default_meta_width));
        }
        self.chunks.get_mut(&key).expect("just inserted")
    }

    /// `true` if the bitvoxel at `index` is set. An absent chunk reads as
    /// unset rather than erroring.
    pub fn is_bit_set(&self, index: WorldIndex) -> bool {
        self.get_chunk(index.chunk()).is_some_and(|c| c.get_bit(index.voxel()))
    }

    /// Sets the bitvoxel at `index`, creating its chunk on demand.
    pub fn set_bit(&mut self, index: WorldIndex, value: bool) {
        self.get_or_create_chunk(index.chunk()).set_bit(index.voxel(), value);
    }

    /// Casts a ray through the world using the bound [`VoxelRaycaster`],
    /// returning the first set bitvoxel's address.
    pub fn cast_ray(&self, origin: [f32; 3], direction: [f32; 3], max_distance: f32) -> Option<WorldIndex> {
        self.raycaster.cast(self, origin, direction, max_distance)
    }
}

impl Default for VoxelWorld {
    fn default() -> Self {
        Self::new(0, MetaWidth::None)
    }
}
