//! Lock-guarded set handle for use across threads
//!
//! [`IntSet`] has no internal synchronization. When several threads need the
//! same set, share a [`SharedIntSet`]: every operation takes the lock for its
//! whole duration, so each call observes and leaves a consistent buffer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use intset_core::{IntSet, IntegerSet};

/// Cloneable, thread-safe handle to one [`IntSet`]
///
/// Clones share the same set. Use [`snapshot`](Self::snapshot) for an
/// independent copy.
#[derive(Debug, Clone, Default)]
pub struct SharedIntSet {
    inner: Arc<Mutex<IntSet>>,
}

impl SharedIntSet {
    /// Create a handle to a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing set
    pub fn from_set(set: IntSet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(set)),
        }
    }

    // A panic while holding the lock cannot leave the word buffer half
    // written, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, IntSet> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert `value`, returning `true` if it was not already a member
    pub fn add(&self, value: usize) -> bool {
        self.lock().add(value)
    }

    /// Remove `value`, returning `true` if it was a member
    pub fn remove(&self, value: usize) -> bool {
        self.lock().remove(value)
    }

    /// Check whether `value` is a member
    pub fn has(&self, value: usize) -> bool {
        self.lock().has(value)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove every member
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Merge `other` into the shared set
    pub fn union_with(&self, other: &IntSet) {
        self.lock().union_with(other);
    }

    /// Independent copy of the current contents
    pub fn snapshot(&self) -> IntSet {
        self.lock().clone()
    }

    /// Run `f` with exclusive access to the set
    pub fn with_set<R>(&self, f: impl FnOnce(&mut IntSet) -> R) -> R {
        f(&mut self.lock())
    }
}

impl From<IntSet> for SharedIntSet {
    fn from(set: IntSet) -> Self {
        Self::from_set(set)
    }
}

impl IntegerSet for SharedIntSet {
    fn has(&self, value: usize) -> bool {
        SharedIntSet::has(self, value)
    }

    fn len(&self) -> usize {
        SharedIntSet::len(self)
    }

    fn is_empty(&self) -> bool {
        SharedIntSet::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedIntSet::new();
        let other = shared.clone();

        assert!(shared.add(5));
        assert!(other.has(5));
        assert!(!other.add(5));
        assert_eq!(shared.len(), 1);

        other.clear();
        assert!(shared.is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let shared = SharedIntSet::from_set([1, 2].into_iter().collect());
        let mut snapshot = shared.snapshot();
        snapshot.add(99);

        assert!(!shared.has(99));
        assert_eq!(shared.snapshot().to_string(), "{1 2}");
    }

    #[test]
    fn test_with_set() {
        let shared = SharedIntSet::new();
        let rendered = shared.with_set(|set| {
            set.add_all([9, 1, 144]);
            set.to_string()
        });
        assert_eq!(rendered, "{1 9 144}");
        assert!(shared.remove(9));
        assert!(!shared.remove(9000));
    }

    #[test]
    fn test_recovers_from_poison() {
        let shared = SharedIntSet::new();
        shared.add(1);

        let poisoner = shared.clone();
        let result = std::thread::spawn(move || {
            poisoner.with_set(|_| panic!("poison the lock"));
        })
        .join();
        assert!(result.is_err());

        assert!(shared.has(1));
        shared.union_with(&[2, 3].into_iter().collect());
        assert_eq!(IntegerSet::len(&shared), 3);
    }
}
