#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cursor;
mod error;
mod impls;
mod kind;
mod make;
mod mutate;
mod policy;

pub mod ops;

#[cfg(test)]
mod testing;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use cursor::{Cursor, elements, elements_mut, entries, entries_mut, items};
pub use error::ElementNotFound;
pub use kind::{Container, ContainerKind, kind_of};
pub use make::{make_element, make_key, make_value};
pub use mutate::{
    clear_map, clear_set, container_size, map_get, map_get_or_insert, modify_element, resize_list,
    set_insert,
};
pub use ops::{List, Map, Set, Text, reverse_map};
pub use policy::{AllocPolicy, Emplace, Schema, StorageAlloc, alloc_affinity};

// -----------------------------------------------------------------------------
// Re-export crates

pub use allocator_api2;
pub use bitvec;
pub use hashbrown;
