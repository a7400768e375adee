//! [`BVXGeometry`]: expands a solved face mask into a renderer index buffer.
//!
//! This crate never decides vertex positions or attributes — a renderer is
//! assumed to have already pushed 24 vertices per bitvoxel (a 4-vertex quad
//! for each of its six faces, whether or not that face ends up visible).
//! What's left is picking, for each bitvoxel's 6-bit face mask, the
//! precomputed set of local triangle indices the renderer's own LUT assigns
//! to that mask and offsetting them into that bitvoxel's 24-slot block.

use thiserror::Error;

use crate::visible_faces::VisibleFaces;

/// Errors raised while expanding a face mask into an index buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The output buffer was too small for the number of indices this face
    /// mask expands to.
    #[error("output buffer has room for {available} indices but {needed} are required")]
    OutOfRange {
        /// The number of indices the expansion needs to write.
        needed: usize,
        /// The number of indices the caller's buffer can hold.
        available: usize,
    },
}

/// Indices per visible face (two triangles).
const INDICES_PER_QUAD: usize = 6;
/// Vertices pushed per bitvoxel: one 4-vertex quad per face, six faces.
const VERTICES_PER_BITVOXEL: u32 = 24;
/// Number of distinct 6-bit face-mask values, and the required LUT length.
const MASK_COUNT: usize = 64;

/// Expands visible-face masks into renderer index buffers.
///
/// `indices_lut` and `indices_flipped_lut` are opaque to this type: each must
/// hold exactly [`MASK_COUNT`] entries, one per possible 6-bit face mask,
/// where entry `m` lists the local triangle indices (into the bitvoxel's own
/// 24-vertex block) that render mask `m`'s combination of faces. The flipped
/// table is the same LUT with reversed winding, selected by the caller's
/// `flipped` argument to [`BVXGeometry::expand`] — this crate makes no
/// per-bitvoxel winding decision of its own.
pub struct BVXGeometry<'a> {
    indices_lut: &'a [&'a [u32]],
    indices_flipped_lut: &'a [&'a [u32]],
}

impl<'a> BVXGeometry<'a> {
    /// Creates an expander from a renderer's own mask-indexed local-index
    /// LUTs.
    ///
    /// # Panics
    ///
    /// Panics if either LUT does not have exactly [`MASK_COUNT`] entries.
    pub fn new(indices_lut: &'a [&'a [u32]], indices_flipped_lut: &'a [&'a [u32]]) -> Self {
        assert_eq!(indices_lut.len(), MASK_COUNT);
        assert_eq!(indices_flipped_lut.len(), MASK_COUNT);
        Self { indices_lut, indices_flipped_lut }
    }

    /// The number of indices a full expansion of `faces` would write.
    pub fn required_len(faces: &[VisibleFaces]) -> usize {
        faces.iter().map(|f| f.count() as usize).sum::<usize>() * INDICES_PER_QUAD
    }

    /// Expands `faces` (indexed the same way [`crate::VoxelFaceGeometry::solve`]
    /// returns them, by [`bvx_core::VoxelIndex::index`]) into `out`.
    ///
    /// `flipped` selects `indices_flipped_lut` over `indices_lut` for the
    /// whole expansion. Returns the number of indices written. Fails if
    /// `out` is smaller than [`Self::required_len`].
    pub fn expand(
        &self,
        faces: &[VisibleFaces],
        flipped: bool,
        out: &mut [u32],
    ) -> Result<usize, GeometryError> {
        let needed = Self::required_len(faces);
        if out.len() < needed {
            return Err(GeometryError::OutOfRange { needed, available: out.len() });
        }

        let lut = if flipped { self.indices_flipped_lut } else { self.indices_lut };
        let mut written = 0usize;
        for (i, mask) in faces.iter().enumerate() {
            if mask.count() == 0 {
                continue;
            }
            let base = i as u32 * VERTICES_PER_BITVOXEL;
            for &local in lut[mask.0 as usize] {
                out[written] = base + local;
                written += 1;
            }
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face_direction::FaceDirection;

    const STANDARD_QUAD: [u32; 6] = [0, 1, 2, 0, 2, 3];
    const FLIPPED_QUAD: [u32; 6] = [0, 1, 3, 1, 2, 3];

    /// Builds a 64-entry LUT the way a renderer would: for each mask value,
    /// concatenate one quad (offset to that face's 4-vertex sub-block within
    /// the bitvoxel's 24-slot block) per set bit, in `FaceDirection` order.
    fn build_lut(quad: &[u32; 6]) -> Vec<Vec<u32>> {
        (0..MASK_COUNT as u8)
            .map(|mask| {
                let mut entries = Vec::new();
                for dir in FaceDirection::ALL {
                    if mask & (1 << dir.index()) != 0 {
                        let face_base = dir.index() as u32 * 4;
                        entries.extend(quad.iter().map(|&v| v + face_base));
                    }
                }
                entries
            })
            .collect()
    }

    fn lut_slices(owned: &[Vec<u32>]) -> Vec<&[u32]> {
        owned.iter().map(|v| v.as_slice()).collect()
    }

    #[test]
    fn required_len_counts_six_indices_per_visible_face() {
        let mut faces = vec![VisibleFaces::NONE; 4096];
        faces[0] = VisibleFaces::ALL;
        assert_eq!(BVXGeometry::required_len(&faces), 36);
    }

    #[test]
    fn expand_fails_when_buffer_is_too_small() {
        let standard = build_lut(&STANDARD_QUAD);
        let flipped = build_lut(&FLIPPED_QUAD);
        let expander = BVXGeometry::new(&lut_slices(&standard), &lut_slices(&flipped));
        let mut faces = vec![VisibleFaces::NONE; 4096];
        faces[0] = VisibleFaces::ALL;
        let mut out = vec![0u32; 10];
        assert_eq!(
            expander.expand(&faces, false, &mut out),
            Err(GeometryError::OutOfRange { needed: 36, available: 10 })
        );
    }

    #[test]
    fn expand_writes_the_lut_entry_for_the_bitvoxels_mask() {
        let standard = build_lut(&STANDARD_QUAD);
        let flipped = build_lut(&FLIPPED_QUAD);
        let expander = BVXGeometry::new(&lut_slices(&standard), &lut_slices(&flipped));
        let mut faces = vec![VisibleFaces::NONE; 4096];
        faces[0].set_visible(FaceDirection::PosX);

        let mut out = vec![0u32; 6];
        let written = expander.expand(&faces, false, &mut out).unwrap();
        assert_eq!(written, 6);
        assert_eq!(&out, &STANDARD_QUAD);
    }

    #[test]
    fn expand_offsets_successive_bitvoxels_by_twenty_four_vertices() {
        let standard = build_lut(&STANDARD_QUAD);
        let flipped = build_lut(&FLIPPED_QUAD);
        let expander = BVXGeometry::new(&lut_slices(&standard), &lut_slices(&flipped));
        let mut faces = vec![VisibleFaces::NONE; 4096];
        faces[0].set_visible(FaceDirection::PosX);
        faces[1].set_visible(FaceDirection::PosX);

        let mut out = vec![0u32; 12];
        let written = expander.expand(&faces, false, &mut out).unwrap();
        assert_eq!(written, 12);
        assert_eq!(&out[0..6], &STANDARD_QUAD);
        let second: Vec<u32> = STANDARD_QUAD.iter().map(|v| v + 24).collect();
        assert_eq!(&out[6..12], second.as_slice());
    }

    #[test]
    fn flipped_flag_selects_the_flipped_lut() {
        let standard = build_lut(&STANDARD_QUAD);
        let flipped = build_lut(&FLIPPED_QUAD);
        let expander = BVXGeometry::new(&lut_slices(&standard), &lut_slices(&flipped));
        let mut faces = vec![VisibleFaces::NONE; 4096];
        faces[0].set_visible(FaceDirection::PosX);

        let mut out = vec![0u32; 6];
        expander.expand(&faces, true, &mut out).unwrap();
        assert_eq!(&out, &FLIPPED_QUAD);
    }

    #[test]
    fn empty_mask_array_requires_no_indices() {
        let standard = build_lut(&STANDARD_QUAD);
        let flipped = build_lut(&FLIPPED_QUAD);
        let faces = vec![VisibleFaces::NONE; 4096];
        assert_eq!(BVXGeometry::required_len(&faces), 0);
        let expander = BVXGeometry::new(&lut_slices(&standard), &lut_slices(&flipped));
        let mut out: [u32; 0] = [];
        assert_eq!(expander.expand(&faces, false, &mut out), Ok(0));
    }
}
