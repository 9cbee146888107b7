use allocator_api2::alloc::Global;

use crate::kind::Container;

// -----------------------------------------------------------------------------
// Storage allocators

/// Handle to the allocator a container was built with.
///
/// The protocol never allocates on its own behalf; it only forwards a
/// container's allocator into elements that need one. A `StorageAlloc` is
/// therefore a cheap, cloneable handle plus one compile-time fact: whether
/// it is the platform default allocator. Propagation is skipped entirely for
/// the default allocator, since default construction already lands there.
///
/// [`Global`] is the default allocator. Arena and pool allocators implement
/// this trait with [`IS_DEFAULT`] set to `false` alongside their
/// [`Allocator`](allocator_api2::alloc::Allocator) implementation.
///
/// [`IS_DEFAULT`]: StorageAlloc::IS_DEFAULT
pub trait StorageAlloc: Clone {
    /// `true` iff this is the platform default allocator.
    const IS_DEFAULT: bool;
}

impl StorageAlloc for Global {
    const IS_DEFAULT: bool = true;
}

// -----------------------------------------------------------------------------
// Allocation policy

/// How a fresh field value destined for a container is constructed.
///
/// The policy is a property of the (container type, field type) pair. It is
/// decided once, at compile time, and never depends on the contents of any
/// particular container instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocPolicy {
    /// Default construction; the container's allocator is not involved.
    UseDefault,
    /// The new value is constructed with the container's allocator.
    ForwardAllocator,
}

impl AllocPolicy {
    /// The policy for an allocator-aware field stored under allocator `A`:
    /// forward unless `A` is the default allocator.
    #[inline]
    pub const fn of<A: StorageAlloc>() -> Self {
        if A::IS_DEFAULT {
            Self::UseDefault
        } else {
            Self::ForwardAllocator
        }
    }

    /// Returns `true` if the policy forwards the container's allocator.
    #[inline]
    pub const fn forwards(self) -> bool {
        matches!(self, Self::ForwardAllocator)
    }
}

/// Returns the allocation policy for fields of type `F` constructed for a
/// container of type `C`.
///
/// The result is stable: it depends only on the two types, so every call for
/// the same pair returns the same policy.
///
/// # Examples
///
/// ```
/// use seriate::{AllocPolicy, alloc_affinity};
///
/// // Plain values never need a container's allocator.
/// assert_eq!(alloc_affinity::<Vec<u32>, u32>(), AllocPolicy::UseDefault);
/// ```
#[inline]
pub const fn alloc_affinity<C, F>() -> AllocPolicy
where
    C: Container,
    F: Emplace<C::Alloc>,
{
    F::POLICY
}

// -----------------------------------------------------------------------------
// Emplace

/// Construction of a default field value under a container's allocator.
///
/// `Emplace<A>` is implemented by every type that can be materialized as a
/// fresh element, key, or value of a container whose allocator handle is
/// `A`. The associated [`POLICY`] records whether [`emplace`] actually
/// consumes the allocator:
///
/// - Types that carry no allocator (integers, `String`, the plain `alloc`
///   containers) implement `Emplace<A>` for every `A` with
///   [`AllocPolicy::UseDefault`] and ignore the handle.
/// - Allocator-carrying containers implement `Emplace<A>` for *their own*
///   allocator type, forwarding the handle whenever `A` is not the default
///   allocator. Hashed containers are constructed from their default hasher
///   state plus the forwarded allocator.
/// - Schema-bearing record types are wired in through
///   [`impl_emplace_for_schema!`](crate::impl_emplace_for_schema); they
///   forward the handle into every allocator-sensitive field they contain.
///
/// A field type carrying a *different* allocator family than its container
/// implements neither case and is rejected at compile time; an application
/// that deliberately mixes families can provide its own `Emplace` impl for
/// the pair.
///
/// [`POLICY`]: Emplace::POLICY
/// [`emplace`]: Emplace::emplace
pub trait Emplace<A: StorageAlloc>: Sized {
    /// Whether construction forwards the container's allocator.
    const POLICY: AllocPolicy;

    /// Builds a default value, using `alloc` as dictated by [`POLICY`].
    ///
    /// [`POLICY`]: Emplace::POLICY
    fn emplace(alloc: &A) -> Self;
}

// -----------------------------------------------------------------------------
// Schema-bearing types

/// Engine hook for generated record types.
///
/// A schema-bearing type is a user-defined aggregate described by the
/// engine's schema system; it may recursively contain allocator-sensitive
/// containers. Such types expose an allocator-forwarding constructor so
/// that a record nested inside an arena-backed container allocates all of
/// its own storage from the same arena.
///
/// The engine's code generator implements `Schema` for each record type and
/// invokes [`impl_emplace_for_schema!`](crate::impl_emplace_for_schema) to
/// register it with the construction policy.
pub trait Schema<A: StorageAlloc>: Sized {
    /// Builds an empty record whose storage lives in `alloc`.
    fn make_in(alloc: &A) -> Self;
}

/// Wires a [`Schema`]-bearing record type into the construction policy.
///
/// The record type must be generic over its allocator (`MyRecord<A>`) and
/// implement [`Schema<A>`]. The generated [`Emplace`] impl forwards the
/// container's allocator whenever it is not the default one, regardless of
/// how the record stores it internally.
#[macro_export]
macro_rules! impl_emplace_for_schema {
    ($ty:ident) => {
        impl<A> $crate::Emplace<A> for $ty<A>
        where
            A: $crate::StorageAlloc + $crate::allocator_api2::alloc::Allocator,
            $ty<A>: $crate::Schema<A>,
        {
            const POLICY: $crate::AllocPolicy = $crate::AllocPolicy::of::<A>();

            #[inline]
            fn emplace(alloc: &A) -> Self {
                <Self as $crate::Schema<A>>::make_in(alloc)
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use allocator_api2::alloc::{Allocator, Global};
    use allocator_api2::vec::Vec as AllocVec;
    use hashbrown::{DefaultHashBuilder, HashMap};

    use super::{AllocPolicy, Emplace, Schema, StorageAlloc, alloc_affinity};
    use crate::testing::CountingArena;

    #[test]
    fn default_allocator_never_propagates() {
        assert_eq!(alloc_affinity::<Vec<String>, String>(), AllocPolicy::UseDefault);
        assert_eq!(
            alloc_affinity::<Vec<Vec<u8>>, Vec<u8>>(),
            AllocPolicy::UseDefault
        );
        // Allocator-aware element under the default allocator: nothing to forward.
        assert_eq!(
            alloc_affinity::<AllocVec<AllocVec<u8, Global>, Global>, AllocVec<u8, Global>>(),
            AllocPolicy::UseDefault
        );
    }

    #[test]
    fn arena_propagates_into_aware_elements() {
        type Inner = AllocVec<u8, CountingArena>;
        type Outer = AllocVec<Inner, CountingArena>;

        assert_eq!(alloc_affinity::<Outer, Inner>(), AllocPolicy::ForwardAllocator);
        // Opaque element types still use default construction.
        assert_eq!(alloc_affinity::<AllocVec<u64, CountingArena>, u64>(), AllocPolicy::UseDefault);
        // Affinity is a property of the pair, not of any instance: repeated
        // queries agree.
        assert_eq!(alloc_affinity::<Outer, Inner>(), alloc_affinity::<Outer, Inner>());
    }

    #[test]
    fn hashed_containers_take_hasher_and_allocator() {
        type Element = HashMap<u32, u32, DefaultHashBuilder, CountingArena>;

        let arena = CountingArena::default();
        assert_eq!(AllocPolicy::of::<CountingArena>(), AllocPolicy::ForwardAllocator);

        let map = Element::emplace(&arena);
        assert!(map.is_empty());
    }

    #[test]
    fn keys_and_values_have_independent_affinity() {
        type Keys = AllocVec<u8, CountingArena>;

        assert_eq!(
            alloc_affinity::<HashMap<Keys, u32, DefaultHashBuilder, CountingArena>, Keys>(),
            AllocPolicy::ForwardAllocator
        );
        assert_eq!(
            alloc_affinity::<HashMap<Keys, u32, DefaultHashBuilder, CountingArena>, u32>(),
            AllocPolicy::UseDefault
        );
    }

    #[test]
    fn nested_maps_stay_default_under_global() {
        assert_eq!(
            alloc_affinity::<Vec<BTreeMap<u32, String>>, BTreeMap<u32, String>>(),
            AllocPolicy::UseDefault
        );
    }

    // A stand-in for an engine-generated record type.
    struct Blob<A: Allocator + StorageAlloc = Global> {
        payload: AllocVec<u8, A>,
    }

    impl<A: Allocator + StorageAlloc> Schema<A> for Blob<A> {
        fn make_in(alloc: &A) -> Self {
            Self {
                payload: AllocVec::new_in(alloc.clone()),
            }
        }
    }

    impl_emplace_for_schema!(Blob);

    #[test]
    fn schema_types_forward_the_allocator() {
        assert_eq!(
            alloc_affinity::<AllocVec<Blob<CountingArena>, CountingArena>, Blob<CountingArena>>(),
            AllocPolicy::ForwardAllocator
        );
        assert_eq!(
            alloc_affinity::<AllocVec<Blob<Global>, Global>, Blob<Global>>(),
            AllocPolicy::UseDefault
        );

        let arena = CountingArena::default();
        let mut blob = Blob::emplace(&arena);
        let before = arena.allocation_count();
        blob.payload.extend_from_slice(b"0123456789");
        assert!(arena.allocation_count() > before, "payload must allocate from the arena");
    }
}
