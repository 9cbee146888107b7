use crate::ops::{List, Map};
use crate::policy::Emplace;

// -----------------------------------------------------------------------------
// Element/Key/Value construction

/// Builds a default element for `list`, correctly allocated.
///
/// Consults the element type's [`Emplace`] impl: if its policy forwards the
/// list's allocator, the new element is constructed inside it; otherwise it
/// is default-constructed. Only the list's allocator is read, never its
/// contents.
///
/// # Examples
///
/// ```
/// use seriate::make_element;
///
/// let list: Vec<String> = Vec::new();
/// assert_eq!(make_element(&list), String::new());
/// ```
#[inline]
pub fn make_element<S>(list: &S) -> S::Element
where
    S: List,
    S::Element: Emplace<S::Alloc>,
{
    S::Element::emplace(&list.allocator())
}

/// Builds a default key for a fresh entry of `map`.
///
/// The key's allocation policy is computed independently of the value's;
/// a map may forward its allocator into one and not the other.
#[inline]
pub fn make_key<M>(map: &M) -> M::Key
where
    M: Map,
    M::Key: Emplace<M::Alloc>,
{
    M::Key::emplace(&map.allocator())
}

/// Builds a default value for a fresh entry of `map`.
#[inline]
pub fn make_value<M>(map: &M) -> M::Value
where
    M: Map,
    M::Value: Emplace<M::Alloc>,
{
    M::Value::emplace(&map.allocator())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use allocator_api2::vec::Vec as AllocVec;

    use super::{make_element, make_key, make_value};
    use crate::testing::CountingArena;

    #[test]
    fn opaque_elements_are_default_constructed() {
        let list: Vec<u64> = Vec::new();
        assert_eq!(make_element(&list), 0);

        let map: BTreeMap<u32, String> = BTreeMap::new();
        assert_eq!(make_key(&map), 0);
        assert_eq!(make_value(&map), String::new());
    }

    #[test]
    fn aware_elements_share_the_arena() {
        let arena = CountingArena::default();
        let list: AllocVec<AllocVec<u8, CountingArena>, CountingArena> =
            AllocVec::new_in(arena.clone());

        let mut element = make_element(&list);
        let before = arena.allocation_count();
        element.extend_from_slice(&[1, 2, 3, 4]);
        assert!(
            arena.allocation_count() > before,
            "the element must allocate from the list's arena"
        );
    }
}
