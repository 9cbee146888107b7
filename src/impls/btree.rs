use alloc::collections::{BTreeMap, BTreeSet};

use allocator_api2::alloc::Global;

use crate::kind::{Container, ContainerKind};
use crate::ops::{Map, Set};
use crate::policy::{AllocPolicy, Emplace, StorageAlloc};

// -----------------------------------------------------------------------------
// BTreeSet<T>

impl<T: Ord> Container for BTreeSet<T> {
    const KIND: ContainerKind = ContainerKind::Set;

    type Alloc = Global;

    #[inline]
    fn size(&self) -> u32 {
        Self::len(self) as u32
    }

    #[inline]
    fn allocator(&self) -> Global {
        Global
    }
}

impl<T: Ord> Set for BTreeSet<T> {
    type Element = T;

    #[inline]
    fn clear(&mut self) {
        Self::clear(self)
    }

    #[inline]
    fn insert(&mut self, item: T) -> bool {
        Self::insert(self, item)
    }

    #[inline]
    fn read_elements(&self) -> impl ExactSizeIterator<Item = &T> {
        self.iter()
    }
}

impl<A: StorageAlloc, T> Emplace<A> for BTreeSet<T> {
    const POLICY: AllocPolicy = AllocPolicy::UseDefault;

    #[inline]
    fn emplace(_alloc: &A) -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// BTreeMap<K, V>

impl<K: Ord, V> Container for BTreeMap<K, V> {
    const KIND: ContainerKind = ContainerKind::Map;

    type Alloc = Global;

    #[inline]
    fn size(&self) -> u32 {
        Self::len(self) as u32
    }

    #[inline]
    fn allocator(&self) -> Global {
        Global
    }
}

impl<K: Ord, V> Map for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn clear(&mut self) {
        Self::clear(self)
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }

    #[inline]
    fn entry_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entry(key).or_insert_with(make)
    }

    #[inline]
    fn read_entries(&self) -> impl ExactSizeIterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn write_entries(&mut self) -> impl ExactSizeIterator<Item = (&K, &mut V)> {
        self.iter_mut()
    }
}

impl<A: StorageAlloc, K, V> Emplace<A> for BTreeMap<K, V> {
    const POLICY: AllocPolicy = AllocPolicy::UseDefault;

    #[inline]
    fn emplace(_alloc: &A) -> Self {
        Self::new()
    }
}
