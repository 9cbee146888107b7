use core::fmt;

use bitvec::order::BitOrder;
use bitvec::ptr::{BitRef, Mut};
use bitvec::store::BitStore;

use crate::error::ElementNotFound;
use crate::kind::Container;
use crate::ops::{List, Map, Set};
use crate::policy::Emplace;

// -----------------------------------------------------------------------------
// Size

/// Returns the element count of any adapted container as `u32`.
///
/// Unsupported types fail to compile; there is no runtime shape check.
#[inline]
pub fn container_size<C: Container>(container: &C) -> u32 {
    container.size()
}

// -----------------------------------------------------------------------------
// List mutators

/// Grows or shrinks `list` to exactly `len` elements.
///
/// New elements are produced with [`make_element`](crate::make_element). If
/// the element type's policy forwards the list's allocator, the list is
/// fully cleared before resizing: a plain resize could leave behind elements
/// that were built under a different allocator. Otherwise the resize happens
/// in place and shrinking preserves the retained prefix.
///
/// # Examples
///
/// ```
/// use seriate::resize_list;
///
/// let mut list = vec![7_u32, 8, 9];
/// resize_list(&mut list, 5);
/// assert_eq!(list, [7, 8, 9, 0, 0]);
///
/// resize_list(&mut list, 2);
/// assert_eq!(list, [7, 8]);
/// ```
pub fn resize_list<S>(list: &mut S, len: u32)
where
    S: List,
    S::Element: Emplace<S::Alloc>,
{
    if <S::Element as Emplace<S::Alloc>>::POLICY.forwards() {
        list.clear();
    }
    let alloc = list.allocator();
    list.resize_with(len, || S::Element::emplace(&alloc));
}

/// Writes one element of a bit-packed boolean list.
///
/// Elements of a packed list cannot be addressed by ordinary reference;
/// mutable traversal yields proxy slots instead. `deserialize` receives a
/// local `bool` to fill in (the engine's `deserialize(value)`-style
/// callable) and the result is committed through the slot.
///
/// # Examples
///
/// ```
/// use bitvec::vec::BitVec;
/// use seriate::{modify_element, resize_list};
///
/// let mut bits: BitVec = BitVec::new();
/// resize_list(&mut bits, 3);
///
/// let slot = bits.get_mut(1).unwrap();
/// modify_element(slot, |value| *value = true);
/// assert_eq!(bits.count_ones(), 1);
/// ```
#[inline]
pub fn modify_element<T, O, F>(mut slot: BitRef<'_, Mut, T, O>, deserialize: F)
where
    T: BitStore,
    O: BitOrder,
    F: FnOnce(&mut bool),
{
    let mut value = false;
    deserialize(&mut value);
    slot.set(value);
}

// -----------------------------------------------------------------------------
// Set mutators

/// Removes every element of `set`.
#[inline]
pub fn clear_set<S: Set>(set: &mut S) {
    set.clear();
}

/// Inserts `item` into `set`; inserting an element that is already present
/// leaves the set unchanged.
#[inline]
pub fn set_insert<S: Set>(set: &mut S, item: S::Element) {
    set.insert(item);
}

// -----------------------------------------------------------------------------
// Map mutators

/// Removes every entry of `map`.
#[inline]
pub fn clear_map<M: Map>(map: &mut M) {
    map.clear();
}

/// Returns the value stored under `key`, inserting a default value built by
/// [`make_value`](crate::make_value) if the key is absent.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use seriate::map_get_or_insert;
///
/// let mut map: BTreeMap<u32, String> = BTreeMap::new();
/// map_get_or_insert(&mut map, 1).push_str("one");
/// assert_eq!(map.get(&1).map(String::as_str), Some("one"));
/// ```
#[inline]
pub fn map_get_or_insert<M>(map: &mut M, key: M::Key) -> &mut M::Value
where
    M: Map,
    M::Value: Emplace<M::Alloc>,
{
    let alloc = map.allocator();
    map.entry_or_insert_with(key, || M::Value::emplace(&alloc))
}

/// Returns the value stored under `key`, or [`ElementNotFound`] if the key
/// is absent.
///
/// Read-only access never inserts; the distinction between "read" and
/// "read-or-create" is the caller's to make.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use seriate::map_get;
///
/// let map = BTreeMap::from([(1, "a"), (2, "b")]);
/// assert_eq!(map_get(&map, &1), Ok(&"a"));
/// assert!(map_get(&map, &3).is_err());
/// ```
#[inline]
pub fn map_get<'a, M>(map: &'a M, key: &M::Key) -> Result<&'a M::Value, ElementNotFound>
where
    M: Map,
    M::Key: fmt::Debug,
{
    match map.find(key) {
        Some(value) => Ok(value),
        None => Err(ElementNotFound::new(key)),
    }
}

// -----------------------------------------------------------------------------
// Tests
