//! Memory regions observed by the demo
//!
//! This module provides the core memory abstractions:
//! - [`stack`]: Fixed-size buffer with automatic storage
//! - [`heap`]: Run-time sized buffer with explicit allocate/release
//! - [`alloc`]: Instrumented allocators for observing (or breaking) heap requests
//! - [`partition`]: Fixed partitions with first-fit placement
//! - [`paging`]: FIFO, LRU and optimal page replacement
//!
//! # Addresses
//!
//! Addresses are plain `usize` values taken from real pointers. They are
//! diagnostic only: the distance between a stack base and a heap base varies
//! from run to run and from platform to platform.
//!
//! ```text
//! distance = heap_base - stack_base   (in bytes, signed)
//! ```

pub mod alloc;
pub mod heap;
pub mod paging;
pub mod partition;
pub mod stack;

/// Memory address type
pub type Address = usize;

/// Element type stored in both buffers
pub type Element = i32;

/// Size of one element in bytes
pub const ELEMENT_SIZE: usize = std::mem::size_of::<Element>();

/// Address of an element pointer
pub fn address_of(ptr: *const Element) -> Address {
    ptr as Address
}

/// Signed distance in bytes from `from` to `to`
pub fn byte_distance(from: Address, to: Address) -> i64 {
    (to as i64).wrapping_sub(from as i64)
}

/// A contiguous byte range starting at `base`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    pub base: Address,
    pub len_bytes: usize,
}

impl AddressRange {
    pub fn new(base: Address, len_bytes: usize) -> Self {
        AddressRange { base, len_bytes }
    }

    /// Range covering `count` elements starting at `base`
    pub fn for_elements(base: Address, count: usize) -> Self {
        Self::new(base, count * ELEMENT_SIZE)
    }

    /// One past the last byte
    pub fn end(&self) -> Address {
        self.base.saturating_add(self.len_bytes)
    }

    /// Check whether two ranges share at least one byte
    pub fn overlaps(&self, other: &AddressRange) -> bool {
        if self.len_bytes == 0 || other.len_bytes == 0 {
            return false;
        }
        self.base < other.end() && other.base < self.end()
    }
}
