use allocator_api2::alloc::Global;
use bitvec::order::BitOrder;
use bitvec::ptr::{BitRef, Mut};
use bitvec::store::BitStore;
use bitvec::vec::BitVec;

use crate::kind::{Container, ContainerKind};
use crate::ops::List;
use crate::policy::{AllocPolicy, Emplace, StorageAlloc};

// -----------------------------------------------------------------------------
// bitvec::vec::BitVec<T, O>
//
// The bit-packed boolean list. Bits have no address, so reads yield `bool`
// by value and writes go through proxy slots (`modify_element`).

impl<T, O> Container for BitVec<T, O>
where
    T: BitStore,
    O: BitOrder,
{
    const KIND: ContainerKind = ContainerKind::List;

    type Alloc = Global;

    #[inline]
    fn size(&self) -> u32 {
        self.len() as u32
    }

    #[inline]
    fn allocator(&self) -> Global {
        Global
    }
}

impl<T, O> List for BitVec<T, O>
where
    T: BitStore,
    O: BitOrder,
{
    type Element = bool;

    type ReadItem<'a>
        = bool
    where
        Self: 'a;

    type Slot<'a>
        = BitRef<'a, Mut, T::Alias, O>
    where
        Self: 'a;

    const PACKED: bool = true;

    #[inline]
    fn clear(&mut self) {
        Self::truncate(self, 0)
    }

    #[inline]
    fn resize_with<F>(&mut self, len: u32, mut make: F)
    where
        F: FnMut() -> bool,
    {
        Self::resize(self, len as usize, make())
    }

    #[inline]
    fn read_elements(&self) -> impl ExactSizeIterator<Item = Self::ReadItem<'_>> {
        self.iter().by_vals()
    }

    #[inline]
    fn slots(&mut self) -> impl ExactSizeIterator<Item = Self::Slot<'_>> {
        self.iter_mut()
    }
}

impl<A: StorageAlloc, T, O> Emplace<A> for BitVec<T, O>
where
    T: BitStore,
    O: BitOrder,
{
    const POLICY: AllocPolicy = AllocPolicy::UseDefault;

    #[inline]
    fn emplace(_alloc: &A) -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use bitvec::vec::BitVec;

    use crate::cursor::{elements, elements_mut};
    use crate::mutate::modify_element;
    use crate::ops::List;

    #[test]
    fn packed_lists_require_slot_writes() {
        assert!(<BitVec as List>::PACKED);
        assert!(!<Vec<bool> as List>::PACKED);
    }

    #[test]
    fn slot_writes_land_in_the_right_bit() {
        let mut bits: BitVec = BitVec::repeat(false, 4);

        let mut cursor = elements_mut(&mut bits);
        let mut index = 0;
        while cursor.more() {
            let slot = cursor.next();
            let odd = index % 2 == 1;
            modify_element(slot, |value| *value = odd);
            index += 1;
        }
        drop(cursor);

        let mut seen = Vec::new();
        let mut cursor = elements(&bits);
        while cursor.more() {
            seen.push(cursor.next());
        }
        assert_eq!(seen, [false, true, false, true]);
    }
}
