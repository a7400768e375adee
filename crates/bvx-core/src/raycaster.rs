//! [`VoxelRaycaster`]: Amanatides–Woo DDA traversal over a [`crate::VoxelWorld`].
//!
//! One grid cell is one bitvoxel (a unit cube in world space). The
//! traversal steps cell-by-cell along the ray, always advancing whichever
//! axis reaches its next cell boundary soonest, and stops at the first set
//! bitvoxel or once `max_distance` is exceeded.

use crate::voxel_world::VoxelWorld;
use crate::world_index::WorldIndex;

/// A stateless DDA line-segment traversal bound to a [`VoxelWorld`] at call
/// time (see that type's doc comment for why it isn't stored by reference).
#[derive(Clone, Copy, Debug, Default)]
pub struct VoxelRaycaster;

impl VoxelRaycaster {
    /// Creates a raycaster. Carries no configuration of its own; everything
    /// about the traversal is derived from the call's origin/direction/
    /// distance and the world being queried.
    pub fn new() -> Self {
        Self
    }

    /// Steps a 1-unit grid cell-by-cell from `origin` along `direction` (not
    /// required to be normalized) for up to `max_distance` world units,
    /// returning the first set bitvoxel's address.
    pub fn cast(
        &self,
        world: &VoxelWorld,
        origin: [f32; 3],
        direction: [f32; 3],
        max_distance: f32,
    ) -> Option<WorldIndex> {
        let len = (direction[0] * direction[0] + direction[1] * direction[1] + direction[2] * direction[2])
            .sqrt();
        if len == 0.0 || max_distance <= 0.0 {
            return None;
        }
        let dir = [direction[0] / len, direction[1] / len, direction[2] / len];

        let mut cell = [origin[0].floor() as i64, origin[1].floor() as i64, origin[2].floor() as i64];

        let step = [sign(dir[0]), sign(dir[1]), sign(dir[2])];

        let mut t_max = [0f32; 3];
        let mut t_delta = [0f32; 3];
        for axis in 0..3 {
            if dir[axis] == 0.0 {
                t_max[axis] = f32::INFINITY;
                t_delta[axis] = f32::INFINITY;
                continue;
            }
            t_delta[axis] = (1.0 / dir[axis]).abs();
            let next_boundary = if dir[axis] > 0.0 {
                cell[axis] as f32 + 1.0
            } else {
                cell[axis] as f32
            };
            t_max[axis] = (next_boundary - origin[axis]) / dir[axis];
        }

        if world.is_bit_set(WorldIndex::from_world(cell[0], cell[1], cell[2])) {
            return Some(WorldIndex::from_world(cell[0], cell[1], cell[2]));
        }

        let mut traveled = 0f32;
        while traveled <= max_distance {
            let axis = if t_max[0] <= t_max[1] {
                if t_max[0] <= t_max[2] { 0 } else { 2 }
            } else if t_max[1] <= t_max[2] {
                1
            } else {
                2
            };

            traveled = t_max[axis];
            if traveled > max_distance {
                break;
            }

            cell[axis] += step[axis];
            t_max[axis] += t_delta[axis];

            if world.is_bit_set(WorldIndex::from_world(cell[0], cell[1], cell[2])) {
                return Some(WorldIndex::from_world(cell[0], cell[1], cell[2]));
            }
        }

        None
    }
}

fn sign(v: f32) -> i64 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
