//! A fixed-size bit vector backed by 32-bit words.
//!
//! Mirrors the role the teacher's `BitPackedArray` plays for `ChunkData`,
//! but at a fixed one-bit-per-element width: this is the backing store for
//! [`crate::bvx_layer::BVXLayer`], which needs bulk word-level access (to
//! fill/empty a whole voxel's 64 bits in two word writes) as well as
//! bounds-checked single-bit access.

use crate::bit_ops;
use crate::error::BvxError;

/// A contiguous sequence of 32-bit words addressed bit-by-bit.
///
/// Requesting zero or a negative word count constructs a single-word array
/// instead of an empty one, matching `spec.md` §4.2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray {
    words: Vec<u32>,
}

impl BitArray {
    /// Creates a new zero-initialized array of `word_count` 32-bit words.
    ///
    /// `word_count <= 0` is treated as `1`.
    pub fn new(word_count: i64) -> Self {
        let n = if word_count <= 0 { 1 } else { word_count as usize };
        Self { words: vec![0u32; n] }
    }

    /// Creates a `BitArray` from already-packed words.
    pub fn from_words(words: Vec<u32>) -> Self {
        let words = if words.is_empty() { vec![0u32] } else { words };
        Self { words }
    }

    /// The number of 32-bit words backing this array.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The raw backing words, for bulk operations (e.g. `BVXLayer::fill`).
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Mutable access to the raw backing words.
    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    fn locate(&self, pos: i64) -> Result<(usize, u32), BvxError> {
        if pos < 0 {
            return Err(BvxError::OutOfRange { pos, word_count: self.words.len() });
        }
        let word = (pos >> 5) as usize;
        if word >= self.words.len() {
            return Err(BvxError::OutOfRange { pos, word_count: self.words.len() });
        }
        Ok((word, (pos & 31) as u32))
    }

    /// Returns the bit at `pos` (0 or 1).
    pub fn bit_at(&self, pos: i64) -> Result<u32, BvxError> {
        let (word, bit) = self.locate(pos)?;
        Ok(bit_ops::bit_at(self.words[word], bit))
    }

    /// Returns the logical inverse of the bit at `pos`.
    pub fn bit_inv_at(&self, pos: i64) -> Result<u32, BvxError> {
        let (word, bit) = self.locate(pos)?;
        Ok(bit_ops::bit_inv_at(self.words[word], bit))
    }

    /// Sets the bit at `pos` to 1.
    pub fn set_bit_at(&mut self, pos: i64) -> Result<(), BvxError> {
        let (word, bit) = self.locate(pos)?;
        self.words[word] = bit_ops::set_bit_at(self.words[word], bit);
        Ok(())
    }

    /// Clears the bit at `pos` to 0.
    pub fn unset_bit_at(&mut self, pos: i64) -> Result<(), BvxError> {
        let (word, bit) = self.locate(pos)?;
        self.words[word] = bit_ops::unset_bit_at(self.words[word], bit);
        Ok(())
    }

    /// Flips the bit at `pos`.
    pub fn toggle_bit_at(&mut self, pos: i64) -> Result<(), BvxError> {
        let (word, bit) = self.locate(pos)?;
        self.words[word] = bit_ops::toggle_bit_at(self.words[word], bit);
        Ok(())
    }

    /// Sets the bit at `pos` to the given boolean value.
    pub fn set_bit(&mut self, pos: i64, value: bool) -> Result<(), BvxError> {
        if value { self.set_bit_at(pos) } else { self.unset_bit_at(pos) }
    }

    /// The total population count (number of set bits) across all words.
    pub fn pop_count(&self) -> u32 {
        self.words.iter().copied().map(bit_ops::pop_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_negative_word_count_defaults_to_one() {
        assert_eq!(BitArray::new(0).word_count(), 1);
        assert_eq!(BitArray::new(-5).word_count(), 1);
        assert_eq!(BitArray::new(4).word_count(), 4);
    }

    #[test]
    fn set_get_round_trip() {
        let mut arr = BitArray::new(2);
        arr.set_bit_at(10).unwrap();
        assert_eq!(arr.bit_at(10).unwrap(), 1);
        assert_eq!(arr.bit_inv_at(10).unwrap(), 0);
        arr.unset_bit_at(10).unwrap();
        assert_eq!(arr.bit_at(10).unwrap(), 0);
    }

    #[test]
    fn toggle_flips_bit() {
        let mut arr = BitArray::new(1);
        arr.toggle_bit_at(3).unwrap();
        assert_eq!(arr.bit_at(3).unwrap(), 1);
        arr.toggle_bit_at(3).unwrap();
        assert_eq!(arr.bit_at(3).unwrap(), 0);
    }

    #[test]
    fn negative_position_is_out_of_range() {
        let arr = BitArray::new(1);
        assert!(matches!(arr.bit_at(-1), Err(BvxError::OutOfRange { .. })));
    }

    #[test]
    fn position_beyond_backing_words_is_out_of_range() {
        let arr = BitArray::new(1); // 32 bits: positions 0..=31 valid
        assert!(arr.bit_at(31).is_ok());
        assert!(matches!(arr.bit_at(32), Err(BvxError::OutOfRange { .. })));
    }

    #[test]
    fn pop_count_sums_across_words() {
        let mut arr = BitArray::new(2);
        arr.set_bit_at(0).unwrap();
        arr.set_bit_at(31).unwrap();
        arr.set_bit_at(32).unwrap();
        assert_eq!(arr.pop_count(), 3);
    }

    #[test]
    fn bulk_word_access_for_group_fill() {
        let mut arr = BitArray::new(4);
        arr.words_mut()[1] = 0xFFFF_FFFF;
        assert_eq!(arr.words()[1], 0xFFFF_FFFF);
        assert_eq!(arr.pop_count(), 32);
    }
}
