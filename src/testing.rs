//! Test support: an instrumented arena stand-in.

use alloc::sync::Arc;
use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use allocator_api2::alloc::{AllocError, Allocator, Global};

use crate::policy::StorageAlloc;

/// A non-default allocator that counts its allocations.
///
/// Storage is delegated to [`Global`]; the counter makes allocator
/// propagation observable in tests, since an element built for an
/// arena-backed container must bump the arena's counter when it grows.
#[derive(Clone, Default)]
pub(crate) struct CountingArena {
    allocations: Arc<AtomicUsize>,
}

impl CountingArena {
    pub(crate) fn allocation_count(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }
}

// `Allocator` is an unsafe trait; the impl only delegates to `Global`.
#[allow(unsafe_code)]
unsafe impl Allocator for CountingArena {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) }
    }
}

impl StorageAlloc for CountingArena {
    const IS_DEFAULT: bool = false;
}
