//! Heap buffer with explicit allocate/check/release
//!
//! [`DynamicBuffer`] requests its storage from a [`GlobalAlloc`] at run time:
//! - The request is checked before any element is written
//! - Elements are written through the raw pointer, then exposed as a slice
//! - [`DynamicBuffer::release`] hands the storage back exactly once
//!
//! # Release Discipline
//!
//! The handle is an `Option<NonNull<_>>` that is `take()`n by the single
//! deallocation path. `release` consumes the buffer, and `Drop` runs the same
//! path, so an early return or a panic still frees the block once and a freed
//! handle can never be read again.

use super::{address_of, Address, Element, ELEMENT_SIZE};
use crate::demo::errors::DemoError;
use std::alloc::{GlobalAlloc, Layout};
use std::num::NonZeroUsize;
use std::ptr::NonNull;

/// A run-time sized sequence of integers on the heap
pub struct DynamicBuffer<'a, A: GlobalAlloc> {
    allocator: &'a A,
    ptr: Option<NonNull<Element>>,
    len: usize,
    layout: Layout,
}

impl<'a, A: GlobalAlloc> DynamicBuffer<'a, A> {
    /// Request storage for `len` elements and write `fill(i)` into element `i`
    ///
    /// Returns [`DemoError::AllocationFailure`] when the allocator hands back
    /// null or the byte size does not fit a layout. Nothing is written in
    /// either case.
    pub fn allocate_with(
        allocator: &'a A,
        len: NonZeroUsize,
        mut fill: impl FnMut(usize) -> Element,
    ) -> Result<Self, DemoError> {
        let layout = Layout::array::<Element>(len.get()).map_err(|_| {
            DemoError::AllocationFailure {
                requested_bytes: len.get().saturating_mul(ELEMENT_SIZE),
                align: std::mem::align_of::<Element>(),
            }
        })?;

        // SAFETY: `len` is non-zero and `Element` is not zero-sized, so the
        // layout has a non-zero size.
        let raw = unsafe { allocator.alloc(layout) }.cast::<Element>();
        let ptr = NonNull::new(raw).ok_or(DemoError::AllocationFailure {
            requested_bytes: layout.size(),
            align: layout.align(),
        })?;

        let buffer = DynamicBuffer {
            allocator,
            ptr: Some(ptr),
            len: len.get(),
            layout,
        };

        for i in 0..buffer.len {
            // SAFETY: `i < len` and the block holds `len` properly aligned elements.
            unsafe { ptr.as_ptr().add(i).write(fill(i)) };
        }

        Ok(buffer)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Element] {
        match self.ptr {
            // SAFETY: every element was written in `allocate_with`, and the
            // block stays allocated while `ptr` is `Some`.
            Some(ptr) => unsafe { std::slice::from_raw_parts(ptr.as_ptr(), self.len) },
            None => &[],
        }
    }

    /// Address of the first element
    pub fn base_address(&self) -> Address {
        address_of(self.as_slice().as_ptr())
    }

    /// Hand the storage back to the allocator
    ///
    /// Returns the number of bytes released.
    pub fn release(mut self) -> usize {
        self.dealloc()
    }

    fn dealloc(&mut self) -> usize {
        match self.ptr.take() {
            Some(ptr) => {
                // SAFETY: `ptr` came from `self.allocator` with `self.layout`,
                // and `take()` guarantees this runs at most once.
                unsafe { self.allocator.dealloc(ptr.as_ptr().cast::<u8>(), self.layout) };
                self.layout.size()
            }
            None => 0,
        }
    }
}

impl<A: GlobalAlloc> Drop for DynamicBuffer<'_, A> {
    fn drop(&mut self) {
        self.dealloc();
    }
}

impl<A: GlobalAlloc> std::fmt::Debug for DynamicBuffer<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicBuffer")
            .field("base", &format_args!("0x{:x}", self.base_address()))
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}
