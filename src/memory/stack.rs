//! Fixed-size buffer with automatic storage
//!
//! [`FixedBuffer`] wraps a plain array, so it lives wherever its owner lives.
//! Declared as a local it sits in the caller's stack frame and is reclaimed
//! when that frame returns; nothing here ever touches an allocator.

use super::{address_of, Address, Element};

/// A compile-time sized sequence of integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBuffer<const N: usize> {
    elements: [Element; N],
}

impl<const N: usize> FixedBuffer<N> {
    /// Buffer where element `i` holds `fill(i)`
    pub fn from_fn(fill: impl FnMut(usize) -> Element) -> Self {
        FixedBuffer {
            elements: std::array::from_fn(fill),
        }
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    /// Address of the first element
    pub fn base_address(&self) -> Address {
        address_of(self.elements.as_ptr())
    }
}
