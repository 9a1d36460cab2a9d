//! Word layout of the packed bit encoding
//!
//! A member `x` lives in word `x / 64` at bit position `x % 64`.

/// Number of candidate members packed into one word
pub const BITS_PER_WORD: usize = u64::BITS as usize;

/// Largest value accepted as a member through validated input
///
/// A set holding it needs 2^26 words (512 MiB). Larger values are rejected
/// with `ValueOverflow` instead of attempting the allocation.
pub const MAX_MEMBER: usize = u32::MAX as usize;

/// Position of a value inside a word buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLocation {
    /// Index of the word holding the value
    pub word: usize,
    /// Single-bit mask selecting the value within its word
    pub mask: u64,
}

impl BitLocation {
    /// Locate `value` in a word buffer
    pub const fn of(value: usize) -> Self {
        Self {
            word: value / BITS_PER_WORD,
            mask: 1u64 << (value % BITS_PER_WORD),
        }
    }

    /// Bit position within the word
    pub const fn bit(&self) -> u32 {
        self.mask.trailing_zeros()
    }
}

/// Number of words needed to hold every value below `bound`
pub const fn words_for(bound: usize) -> usize {
    bound.div_ceil(BITS_PER_WORD)
}

/// Value represented by `bit` of word `word`
pub const fn value_at(word: usize, bit: u32) -> usize {
    word * BITS_PER_WORD + bit as usize
}
