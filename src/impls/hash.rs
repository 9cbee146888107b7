use core::hash::{BuildHasher, Hash};

use allocator_api2::alloc::Allocator;
use hashbrown::{HashMap, HashSet};

use crate::kind::{Container, ContainerKind};
use crate::ops::{Map, Set};
use crate::policy::{AllocPolicy, Emplace, StorageAlloc};

// -----------------------------------------------------------------------------
// hashbrown::HashSet<T, S, A>

impl<T, S, A> Container for HashSet<T, S, A>
where
    T: Hash + Eq,
    S: BuildHasher,
    A: Allocator + StorageAlloc,
{
    const KIND: ContainerKind = ContainerKind::Set;

    type Alloc = A;

    #[inline]
    fn size(&self) -> u32 {
        Self::len(self) as u32
    }

    #[inline]
    fn allocator(&self) -> A {
        Self::allocator(self).clone()
    }
}

impl<T, S, A> Set for HashSet<T, S, A>
where
    T: Hash + Eq,
    S: BuildHasher,
    A: Allocator + StorageAlloc,
{
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

// Construction pairs the default hasher state with the forwarded allocator.
impl<T, S, A> Emplace<A> for HashSet<T, S, A>
where
    S: BuildHasher + Default,
    A: Allocator + StorageAlloc,
{
    const POLICY: AllocPolicy = AllocPolicy::of::<A>();

    #[inline]
    fn emplace(alloc: &A) -> Self {
        Self::with_hasher_in(S::default(), alloc.clone())
    }
}

// -----------------------------------------------------------------------------
// hashbrown::HashMap<K, V, S, A>

impl<K, V, S, A> Container for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: Allocator + StorageAlloc,
{
    const KIND: ContainerKind = ContainerKind::Map;

    type Alloc = A;

    #[inline]
    fn size(&self) -> u32 {
        Self::len(self) as u32
    }

    #[inline]
    fn allocator(&self) -> A {
        Self::allocator(self).clone()
    }
}

impl<K, V, S, A> Map for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: Allocator + StorageAlloc,
{
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

impl<K, V, S, A> Emplace<A> for HashMap<K, V, S, A>
where
    S: BuildHasher + Default,
    A: Allocator + StorageAlloc,
{
    const POLICY: AllocPolicy = AllocPolicy::of::<A>();

    #[inline]
    fn emplace(alloc: &A) -> Self {
        Self::with_hasher_in(S::default(), alloc.clone())
    }
}
