use alloc::format;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A read-only map lookup failed because the key is absent.
///
/// This is the layer's single runtime error, raised by
/// [`map_get`](crate::map_get) only. Read-only access never inserts a
/// default; callers that want read-or-create semantics use
/// [`map_get_or_insert`](crate::map_get_or_insert) instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no element for key `{key}` in the map")]
pub struct ElementNotFound {
    key: String,
}

impl ElementNotFound {
    /// Records the missing key, rendered with its `Debug` representation.
    pub fn new<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        Self {
            key: format!("{key:?}"),
        }
    }

    /// The rendered form of the key that was not found.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}
