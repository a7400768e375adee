//! The crate's single error type.
//!
//! All silent-wrap behaviors (out-of-range spatial key or voxel-index
//! components, wrap on inc/dec past an axis edge) are design decisions, not
//! errors, and never produce a [`BvxError`]. Only [`BitArray`](crate::BitArray)
//! bit accesses fail fast.

use thiserror::Error;

/// Errors raised by `bvx-core`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BvxError {
    /// A bit position was negative, or its derived word index fell outside
    /// the backing storage.
    #[error("bit position {pos} out of range for array of {word_count} word(s)")]
    OutOfRange {
        /// The position that was requested.
        pos: i64,
        /// The number of 32-bit words backing the array.
        word_count: usize,
    },
}
