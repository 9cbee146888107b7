use crate::kind::Container;

// -----------------------------------------------------------------------------
// List trait

/// An ordered, resizable sequence.
///
/// This trait covers `Vec`-like containers as well as bit-packed boolean
/// sequences. The two differ in how individual elements are reached, which
/// is why the traversal item types are associated types rather than plain
/// references:
///
/// - For ordinary lists, [`ReadItem`] is `&T` and [`Slot`] is `&mut T`.
/// - For packed boolean lists ([`PACKED`]` == true`), single bits cannot be
///   addressed by reference: [`ReadItem`] is `bool` by value and [`Slot`]
///   is a proxy, written through
///   [`modify_element`](crate::modify_element).
///
/// Resizing is expressed through [`resize_with`] so that the element
/// factory ([`make_element`](crate::make_element) under the allocator
/// policy) stays in the caller's hands; use
/// [`resize_list`](crate::resize_list) rather than calling `resize_with`
/// directly.
///
/// # Contract
///
/// Elements are kept in linear order from front to back. `read_elements`
/// and `slots` traverse the full list in that order, and `resize_with`
/// leaves the list holding exactly `len` elements.
///
/// [`ReadItem`]: List::ReadItem
/// [`Slot`]: List::Slot
/// [`PACKED`]: List::PACKED
/// [`resize_with`]: List::resize_with
pub trait List: Container {
    /// The logical element type.
    type Element;

    /// Item yielded by read-only traversal.
    type ReadItem<'a>
    where
        Self: 'a;

    /// Item yielded by mutable traversal.
    type Slot<'a>
    where
        Self: 'a;

    /// `true` iff elements are not independently addressable and must be
    /// mutated through [`modify_element`](crate::modify_element).
    const PACKED: bool = false;

    /// Removes all elements.
    fn clear(&mut self);

    /// Grows or shrinks the list to exactly `len` elements, producing new
    /// elements with `make`.
    fn resize_with<F>(&mut self, len: u32, make: F)
    where
        F: FnMut() -> Self::Element;

    /// Iterates the elements front to back for reading.
    fn read_elements(&self) -> impl ExactSizeIterator<Item = Self::ReadItem<'_>>;

    /// Iterates the elements front to back for writing.
    fn slots(&mut self) -> impl ExactSizeIterator<Item = Self::Slot<'_>>;
}
