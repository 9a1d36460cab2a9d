//! Growable bit-vector set of non-negative integers
//!
//! Membership of `x` is the bit at [`BitLocation::of(x)`](BitLocation::of)
//! in a buffer of 64-bit words. The buffer grows by appending zero words
//! when a larger value is added and never shrinks on its own, so removing a
//! member clears its bit but keeps the word. [`IntSet::len`] counts set bits
//! only; the buffer length is a capacity detail.

use alloc::vec::Vec;
use core::fmt;
use core::iter::Copied;
use core::slice;
use core::str::FromStr;

use crate::layout::{value_at, words_for, BitLocation, BITS_PER_WORD};
use crate::validation::{member_from_i64, parse_set, validate_capacity};
use crate::{IntSetError, IntegerSet};

/// Set of non-negative integers packed into 64-bit words
///
/// The empty buffer is the empty set, so `IntSet::default()` is ready to
/// use. Instances own their buffer exclusively; `clone` gives an
/// independent copy. No internal synchronization is done.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntSet {
    words: Vec<u64>,
}

impl IntSet {
    /// Create an empty set with no backing words
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create an empty set able to hold every value below `bound` without growing
    ///
    /// `bound` is not checked; all `ceil(bound / 64)` words are allocated up
    /// front. Use [`try_with_capacity`](Self::try_with_capacity) for untrusted
    /// input.
    pub fn with_capacity(bound: usize) -> Self {
        Self {
            words: alloc::vec![0; words_for(bound)],
        }
    }

    /// [`with_capacity`](Self::with_capacity), rejecting bounds past
    /// [`MAX_MEMBER`](crate::MAX_MEMBER) `+ 1` with `ValueOverflow`
    pub fn try_with_capacity(bound: usize) -> crate::Result<Self> {
        validate_capacity(bound).map(Self::with_capacity)
    }

    /// Create a set from raw words, word `i` bit `j` standing for `64 * i + j`
    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// Check whether `value` is a member
    ///
    /// Values past the end of the buffer are simply absent.
    pub fn has(&self, value: usize) -> bool {
        let loc = BitLocation::of(value);
        self.words
            .get(loc.word)
            .is_some_and(|word| word & loc.mask != 0)
    }

    /// Insert `value`, growing the buffer to cover it
    ///
    /// Returns `true` if the value was not already a member. The buffer grows
    /// to `value / 64 + 1` words, so values far above
    /// [`MAX_MEMBER`](crate::MAX_MEMBER) exhaust memory. Input from outside
    /// the program should go through [`try_add`](Self::try_add) or the
    /// parsers, which reject such values.
    pub fn add(&mut self, value: usize) -> bool {
        let loc = BitLocation::of(value);
        if loc.word >= self.words.len() {
            self.words.resize(loc.word + 1, 0);
        }

        let word = &mut self.words[loc.word];
        let inserted = *word & loc.mask == 0;
        *word |= loc.mask;
        inserted
    }

    /// Insert every value yielded by `values`
    pub fn add_all<I: IntoIterator<Item = usize>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }

    /// Remove `value` if present
    ///
    /// A value beyond the buffer is a no-op. Returns `true` if it was a member.
    pub fn remove(&mut self, value: usize) -> bool {
        let loc = BitLocation::of(value);
        match self.words.get_mut(loc.word) {
            Some(word) => {
                let removed = *word & loc.mask != 0;
                *word &= !loc.mask;
                removed
            }
            None => false,
        }
    }

    /// Remove every member, keeping the buffer
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of members (population count over every word)
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Check whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Number of values representable without growing the buffer
    pub fn capacity(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }

    /// Number of words in the buffer
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The backing words
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// The backing words as native-endian bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    /// Iterate over members in ascending order
    pub fn iter(&self) -> Iter<'_> {
        Bits::new(self.words.iter().copied())
    }

    /// Set `self` to the union of `self` and `other`
    ///
    /// Words of `other` past the end of `self` are appended, so every member
    /// of `other` becomes a member of `self`. `other` is not modified.
    pub fn union_with(&mut self, other: &IntSet) {
        let shared = self.words.len().min(other.words.len());
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            *mine |= *theirs;
        }
        self.words.extend_from_slice(&other.words[shared..]);
    }

    /// Members of both `self` and `other`, ascending
    pub fn intersect_with(&self, other: &IntSet) -> Vec<usize> {
        self.intersection(other).collect()
    }

    /// Members of `self` that are not members of `other`, ascending
    pub fn difference_with(&self, other: &IntSet) -> Vec<usize> {
        self.difference(other).collect()
    }

    /// Members of exactly one of `self` and `other`, ascending
    pub fn symmetric_difference(&self, other: &IntSet) -> Vec<usize> {
        self.symmetric_difference_iter(other).collect()
    }

    /// Lazily iterate over members of both sets
    pub fn intersection<'a>(&'a self, other: &'a IntSet) -> Bits<WordPairs<'a>> {
        let end = self.words.len().min(other.words.len());
        Bits::new(WordPairs::new(&self.words, &other.words, end, |a, b| a & b))
    }

    /// Lazily iterate over members of `self` missing from `other`
    pub fn difference<'a>(&'a self, other: &'a IntSet) -> Bits<WordPairs<'a>> {
        let end = self.words.len();
        Bits::new(WordPairs::new(&self.words, &other.words, end, |a, b| a & !b))
    }

    /// Lazily iterate over members of exactly one of the sets
    pub fn symmetric_difference_iter<'a>(&'a self, other: &'a IntSet) -> Bits<WordPairs<'a>> {
        let end = self.words.len().max(other.words.len());
        Bits::new(WordPairs::new(&self.words, &other.words, end, |a, b| a ^ b))
    }

    /// Keep only members also present in `other`
    pub fn intersect_assign(&mut self, other: &IntSet) {
        for (i, word) in self.words.iter_mut().enumerate() {
            *word &= other.words.get(i).copied().unwrap_or(0);
        }
    }

    /// Drop every member present in `other`
    pub fn difference_assign(&mut self, other: &IntSet) {
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            *mine &= !*theirs;
        }
    }

    /// Set `self` to the members of exactly one of `self` and `other`
    pub fn symmetric_difference_assign(&mut self, other: &IntSet) {
        let shared = self.words.len().min(other.words.len());
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            *mine ^= *theirs;
        }
        self.words.extend_from_slice(&other.words[shared..]);
    }

    /// [`has`](Self::has) for signed input, rejecting negatives and values
    /// above [`MAX_MEMBER`](crate::MAX_MEMBER)
    pub fn try_has(&self, value: i64) -> crate::Result<bool> {
        member_from_i64(value).map(|member| self.has(member))
    }

    /// [`add`](Self::add) for signed input
    ///
    /// Negatives and values above [`MAX_MEMBER`](crate::MAX_MEMBER) are
    /// rejected before the buffer is touched.
    pub fn try_add(&mut self, value: i64) -> crate::Result<bool> {
        member_from_i64(value).map(|member| self.add(member))
    }

    /// [`remove`](Self::remove) for signed input, rejecting negatives
    pub fn try_remove(&mut self, value: i64) -> crate::Result<bool> {
        member_from_i64(value).map(|member| self.remove(member))
    }
}

impl IntegerSet for IntSet {
    fn has(&self, value: usize) -> bool {
        IntSet::has(self, value)
    }

    fn len(&self) -> usize {
        IntSet::len(self)
    }

    fn is_empty(&self) -> bool {
        IntSet::is_empty(self)
    }
}

// Equality is by membership; trailing zero words do not matter.
impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        let (short, long) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };

        short[..] == long[..short.len()] && long[short.len()..].iter().all(|&word| word == 0)
    }
}

impl Eq for IntSet {}

/// Renders as `{v1 v2 v3}` in ascending order, or `{}` when empty
impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

impl FromStr for IntSet {
    type Err = IntSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_set(s)
    }
}

impl Extend<usize> for IntSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.add_all(iter);
    }
}

impl FromIterator<usize> for IntSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = IntSet::new();
        set.add_all(iter);
        set
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the members of an [`IntSet`]
pub type Iter<'a> = Bits<Copied<slice::Iter<'a, u64>>>;

/// Ascending iterator over the set bits of a word sequence
///
/// Zero words are skipped whole; within a word the lowest set bit is taken
/// with `trailing_zeros` and then cleared.
#[derive(Debug, Clone)]
pub struct Bits<W> {
    words: W,
    next_word: usize,
    base: usize,
    current: u64,
}

impl<W: Iterator<Item = u64>> Bits<W> {
    /// Iterate over the bits of `words`, word `i` covering values `64 * i ..`
    pub fn new(words: W) -> Self {
        Self {
            words,
            next_word: 0,
            base: 0,
            current: 0,
        }
    }
}

impl<W: Iterator<Item = u64>> Iterator for Bits<W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.current = self.words.next()?;
            self.base = value_at(self.next_word, 0);
            self.next_word += 1;
        }

        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.base + bit)
    }
}

/// Word-by-word combination of two buffers, the shorter padded with zeros
#[derive(Debug, Clone)]
pub struct WordPairs<'a> {
    lhs: &'a [u64],
    rhs: &'a [u64],
    index: usize,
    end: usize,
    op: fn(u64, u64) -> u64,
}

impl<'a> WordPairs<'a> {
    fn new(lhs: &'a [u64], rhs: &'a [u64], end: usize, op: fn(u64, u64) -> u64) -> Self {
        Self {
            lhs,
            rhs,
            index: 0,
            end,
            op,
        }
    }
}

impl Iterator for WordPairs<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }

        let a = self.lhs.get(self.index).copied().unwrap_or(0);
        let b = self.rhs.get(self.index).copied().unwrap_or(0);
        self.index += 1;
        Some((self.op)(a, b))
    }
}
