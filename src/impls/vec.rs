use alloc::collections::VecDeque;
use alloc::vec::Vec;

use allocator_api2::alloc::Global;

use crate::kind::{Container, ContainerKind};
use crate::ops::List;
use crate::policy::{AllocPolicy, Emplace, StorageAlloc};

// -----------------------------------------------------------------------------
// Vec<T>

impl<T> Container for Vec<T> {
    const KIND: ContainerKind = ContainerKind::List;

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

impl<T> List for Vec<T> {
    type Element = T;

    type ReadItem<'a>
        = &'a T
    where
        Self: 'a;

    type Slot<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline]
    fn clear(&mut self) {
        Self::clear(self)
    }

    #[inline]
    fn resize_with<F>(&mut self, len: u32, make: F)
    where
        F: FnMut() -> T,
    {
        Self::resize_with(self, len as usize, make)
    }

    #[inline]
    fn read_elements(&self) -> impl ExactSizeIterator<Item = Self::ReadItem<'_>> {
        self.iter()
    }

    #[inline]
    fn slots(&mut self) -> impl ExactSizeIterator<Item = Self::Slot<'_>> {
        self.iter_mut()
    }
}

impl<A: StorageAlloc, T> Emplace<A> for Vec<T> {
    const POLICY: AllocPolicy = AllocPolicy::UseDefault;

    #[inline]
    fn emplace(_alloc: &A) -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// VecDeque<T>

impl<T> Container for VecDeque<T> {
    const KIND: ContainerKind = ContainerKind::List;

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

impl<T> List for VecDeque<T> {
    type Element = T;

    type ReadItem<'a>
        = &'a T
    where
        Self: 'a;

    type Slot<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline]
    fn clear(&mut self) {
        Self::clear(self)
    }

    #[inline]
    fn resize_with<F>(&mut self, len: u32, make: F)
    where
        F: FnMut() -> T,
    {
        Self::resize_with(self, len as usize, make)
    }

    #[inline]
    fn read_elements(&self) -> impl ExactSizeIterator<Item = Self::ReadItem<'_>> {
        self.iter()
    }

    #[inline]
    fn slots(&mut self) -> impl ExactSizeIterator<Item = Self::Slot<'_>> {
        self.iter_mut()
    }
}

impl<A: StorageAlloc, T> Emplace<A> for VecDeque<T> {
    const POLICY: AllocPolicy = AllocPolicy::UseDefault;

    #[inline]
    fn emplace(_alloc: &A) -> Self {
        Self::new()
    }
}
