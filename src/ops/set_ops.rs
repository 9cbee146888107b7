use crate::kind::Container;

// -----------------------------------------------------------------------------
// Set trait

/// A collection of unique elements.
///
/// Deserialization populates a set by clearing it and inserting decoded
/// elements one by one; serialization walks it with
/// [`read_elements`]. Sets have no positional access and no mutable
/// traversal: an element's identity participates in the set's internal
/// organization, so elements are replaced, never edited in place.
///
/// [`read_elements`]: Set::read_elements
pub trait Set: Container {
    /// The stored element type.
    type Element;

    /// Removes all elements.
    fn clear(&mut self);

    /// Inserts `item`, keeping elements unique.
    ///
    /// Returns `true` if the element was not present before; inserting a
    /// duplicate leaves the set unchanged.
    fn insert(&mut self, item: Self::Element) -> bool;

    /// Iterates the elements in the set's own order.
    fn read_elements(&self) -> impl ExactSizeIterator<Item = &Self::Element>;
}
