use crate::kind::Container;

// -----------------------------------------------------------------------------
// Map trait

/// A key/value map.
///
/// A map's storage pairs an immutable key with its value, but the logical
/// element exposed to the engine is an independent `(Key, Value)` pair with
/// a constructible key. This is why `Key` and `Value` are separate
/// associated types rather than a borrowed entry type, and why their
/// allocation policies are computed independently by
/// [`make_key`](crate::make_key) and [`make_value`](crate::make_value).
///
/// Lookup comes in two flavors with deliberately different failure modes:
/// [`find`] is read-only and reports absence, while
/// [`entry_or_insert_with`] materializes a default entry. The engine-facing
/// wrappers are [`map_get`](crate::map_get) and
/// [`map_get_or_insert`](crate::map_get_or_insert).
///
/// [`find`]: Map::find
/// [`entry_or_insert_with`]: Map::entry_or_insert_with
pub trait Map: Container {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// Removes all entries.
    fn clear(&mut self);

    /// Returns the value stored under `key`, if present.
    fn find(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: Self::Key, value: Self::Value);

    /// Returns the value stored under `key`, inserting `make()` first if
    /// the key is absent.
    fn entry_or_insert_with<F>(&mut self, key: Self::Key, make: F) -> &mut Self::Value
    where
        F: FnOnce() -> Self::Value;

    /// Iterates the entries in the map's own order.
    fn read_entries(&self) -> impl ExactSizeIterator<Item = (&Self::Key, &Self::Value)>;

    /// Iterates the entries with mutable access to the values.
    fn write_entries(&mut self) -> impl ExactSizeIterator<Item = (&Self::Key, &mut Self::Value)>;
}

// -----------------------------------------------------------------------------
// Map inversion

/// Builds the value→key inversion of `map`.
///
/// Every entry `(k, v)` of the source becomes `(v, k)` in the result. When
/// several keys map to the same value, only one survives: entries are
/// written in the source map's iteration order and later writes replace
/// earlier ones, so which key wins follows from that order and is not
/// otherwise specified. Collisions are lossy by design, not an error.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use seriate::reverse_map;
///
/// let forward = BTreeMap::from([(1, "x"), (2, "y")]);
/// let backward: BTreeMap<&str, i32> = reverse_map(&forward);
/// assert_eq!(backward, BTreeMap::from([("x", 1), ("y", 2)]));
/// ```
pub fn reverse_map<M, R>(map: &M) -> R
where
    M: Map,
    R: Map<Key = M::Value, Value = M::Key> + Default,
    M::Key: Clone,
    M::Value: Clone,
{
    let mut reversed = R::default();
    for (key, value) in map.read_entries() {
        reversed.put(value.clone(), key.clone());
    }
    reversed
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use hashbrown::HashMap;

    use super::reverse_map;
    use crate::kind::Container;

    #[test]
    fn inversion_swaps_keys_and_values() {
        let forward = BTreeMap::from([(1_u32, String::from("x")), (2, String::from("y"))]);
        let backward: BTreeMap<String, u32> = reverse_map(&forward);

        assert_eq!(backward.get("x"), Some(&1));
        assert_eq!(backward.get("y"), Some(&2));
        assert_eq!(Container::size(&backward), 2);
    }

    #[test]
    fn colliding_values_keep_a_single_entry() {
        let forward = BTreeMap::from([(1_u32, String::from("x")), (2, String::from("x"))]);
        let backward: BTreeMap<String, u32> = reverse_map(&forward);

        assert_eq!(Container::size(&backward), 1);
        let survivor = backward.get("x").copied().unwrap();
        assert!(survivor == 1 || survivor == 2);
    }

    #[test]
    fn inversion_crosses_map_families() {
        let forward = BTreeMap::from([(1_u32, String::from("x")), (2, String::from("y"))]);
        let backward: HashMap<String, u32> = reverse_map(&forward);

        assert_eq!(backward.get("y"), Some(&2));
    }
}
