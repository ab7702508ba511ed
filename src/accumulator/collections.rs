use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use super::Accumulator;

impl<T, S> Accumulator<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn empty() -> Self {
        HashSet::default()
    }

    #[inline]
    fn concat_mut(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> Accumulator<T> for BTreeSet<T> {
    #[inline]
    fn empty() -> Self {
        BTreeSet::new()
    }

    #[inline]
    fn concat_mut(&mut self, item: T) {
        self.insert(item);
    }
}

impl<K, V, S> Accumulator<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn empty() -> Self {
        HashMap::default()
    }

    #[inline]
    fn concat_mut(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Accumulator<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn empty() -> Self {
        BTreeMap::new()
    }

    #[inline]
    fn concat_mut(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}
