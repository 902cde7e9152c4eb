//! A bounded LRU mapping a Solution's bit pattern to its UNSAT count
//! (spec.md §3, §4.3).

use lru::LruCache;
use std::num::NonZeroUsize;

/// Bounded LRU keyed on the raw bit vector. Eviction is purely a
/// performance optimisation (spec.md §9, "LRU cache") — correctness never
/// depends on whether an entry is still resident, which is exactly what
/// scenario E5 (spec.md §8) exercises by rerunning with capacity 1.
#[derive(Debug)]
pub struct FitnessCache {
    inner: LruCache<Vec<bool>, usize>,
}

impl FitnessCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).expect("capacity.max(1) is never zero");
        Self {
            inner: LruCache::new(cap),
        }
    }

    pub fn get(&mut self, key: &[bool]) -> Option<&usize> {
        self.inner.get(key)
    }

    pub fn put(&mut self, key: Vec<bool>, value: usize) {
        self.inner.put(key, value);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used_on_overflow() {
        let mut cache = FitnessCache::new(2);
        cache.put(vec![true, false], 1);
        cache.put(vec![false, true], 2);
        // Touch the first entry so the second becomes LRU.
        assert_eq!(cache.get(&[true, false]), Some(&1));
        cache.put(vec![true, true], 3);
        assert_eq!(cache.get(&[false, true]), None);
        assert_eq!(cache.get(&[true, false]), Some(&1));
        assert_eq!(cache.get(&[true, true]), Some(&3));
    }

    #[test]
    fn capacity_one_still_stores_most_recent() {
        let mut cache = FitnessCache::new(1);
        cache.put(vec![true], 10);
        assert_eq!(cache.get(&[true]), Some(&10));
        cache.put(vec![false], 20);
        assert_eq!(cache.get(&[true]), None);
        assert_eq!(cache.get(&[false]), Some(&20));
    }
}
