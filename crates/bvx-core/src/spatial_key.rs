//! The capability set shared by [`crate::LinearKey`] and [`crate::MortonKey`].
//!
//! Both key kinds pack an `(x, y, z)` triple, each axis in `0..1024`, into a
//! 30-bit scalar — `Linear` straightforwardly, `Morton` bit-interleaved for
//! better hash-grid locality. Every axis operation wraps modulo 1024 rather
//! than failing; `spec.md` §9 mandates wrap over the legacy source's
//! range-checked variants, since downstream inc/dec rely on wrap for
//! total-ness.

/// Axis values wrap within `0..AXIS_RANGE`.
pub const AXIS_RANGE: u32 = 1024;

/// Common operations over a 3-axis, 30-bit spatial key.
///
/// Implemented by [`crate::LinearKey`] and [`crate::MortonKey`]. Both
/// constructors wrap out-of-range axis inputs modulo [`AXIS_RANGE`] rather
/// than failing.
pub trait SpatialKey: Copy + Clone + PartialEq + std::fmt::Debug {
    /// Builds a key from an `(x, y, z)` triple, wrapping each axis modulo
    /// [`AXIS_RANGE`].
    fn from_xyz(x: u32, y: u32, z: u32) -> Self;

    /// The x component, in `0..AXIS_RANGE`.
    fn x(&self) -> u32;
    /// The y component, in `0..AXIS_RANGE`.
    fn y(&self) -> u32;
    /// The z component, in `0..AXIS_RANGE`.
    fn z(&self) -> u32;
    /// The packed 30-bit scalar form.
    fn key(&self) -> u32;

    /// Numeric comparison of the two keys' scalar forms.
    fn cmp_key(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }

    /// The key with x incremented by 1, wrapping at the axis edge.
    fn inc_x(&self) -> Self;
    /// The key with x decremented by 1, wrapping at the axis edge.
    fn dec_x(&self) -> Self;
    /// The key with y incremented by 1, wrapping at the axis edge.
    fn inc_y(&self) -> Self;
    /// The key with y decremented by 1, wrapping at the axis edge.
    fn dec_y(&self) -> Self;
    /// The key with z incremented by 1, wrapping at the axis edge.
    fn inc_z(&self) -> Self;
    /// The key with z decremented by 1, wrapping at the axis edge.
    fn dec_z(&self) -> Self;

    /// Componentwise addition, re-encoded and wrapped.
    fn add(&self, other: &Self) -> Self {
        Self::from_xyz(
            self.x().wrapping_add(other.x()),
            self.y().wrapping_add(other.y()),
            self.z().wrapping_add(other.z()),
        )
    }

    /// Componentwise subtraction, re-encoded and wrapped.
    fn sub(&self, other: &Self) -> Self {
        Self::from_xyz(
            self.x().wrapping_sub(other.x()),
            self.y().wrapping_sub(other.y()),
            self.z().wrapping_sub(other.z()),
        )
    }
}
