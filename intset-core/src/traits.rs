//! Read-side interface shared by set implementations

/// Set of non-negative integers that can be queried for membership
///
/// Implemented by the plain [`IntSet`](crate::IntSet) and by wrappers that
/// guard one behind a lock, so callers can be written against either.
pub trait IntegerSet {
    /// Check whether `value` is a member
    fn has(&self, value: usize) -> bool;

    /// Get the number of members
    fn len(&self) -> usize;

    /// Check whether the set has no members
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
