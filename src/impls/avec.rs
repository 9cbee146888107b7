use allocator_api2::alloc::Allocator;
use allocator_api2::vec::Vec;

use crate::kind::{Container, ContainerKind};
use crate::ops::List;
use crate::policy::{AllocPolicy, Emplace, StorageAlloc};

// -----------------------------------------------------------------------------
// allocator_api2::vec::Vec<T, A>
//
// The allocator-carrying list. This is the shape the propagation policy
// exists for: a fresh element of `Vec<Vec<u8, A>, A>` must be built inside
// the outer vector's allocator.

impl<T, A> Container for Vec<T, A>
where
    A: Allocator + StorageAlloc,
{
    const KIND: ContainerKind = ContainerKind::List;

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

impl<T, A> List for Vec<T, A>
where
    A: Allocator + StorageAlloc,
{
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

    fn resize_with<F>(&mut self, len: u32, mut make: F)
    where
        F: FnMut() -> T,
    {
        let len = len as usize;
        if len <= Self::len(self) {
            Self::truncate(self, len);
        } else {
            Self::reserve(self, len - Self::len(self));
            while Self::len(self) < len {
                Self::push(self, make());
            }
        }
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

impl<T, A> Emplace<A> for Vec<T, A>
where
    A: Allocator + StorageAlloc,
{
    const POLICY: AllocPolicy = AllocPolicy::of::<A>();

    #[inline]
    fn emplace(alloc: &A) -> Self {
        Self::new_in(alloc.clone())
    }
}
