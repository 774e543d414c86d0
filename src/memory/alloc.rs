//! Instrumented allocators
//!
//! Both types wrap another [`GlobalAlloc`] and are meant to be passed by
//! reference to [`DynamicBuffer`](super::heap::DynamicBuffer), not installed
//! as the `#[global_allocator]`:
//! - [`TrackingAlloc`]: counts requests and releases, keeps a block table with
//!   tombstones, and records double/invalid frees instead of forwarding them
//! - [`LimitedAlloc`]: refuses requests that would exceed a byte limit
//!   (a limit of 0 makes every request fail)

use super::Address;
use rustc_hash::FxHashMap;
use std::alloc::{GlobalAlloc, Layout};
use std::cell::{Cell, RefCell};

/// State of a tracked block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Allocated,
    Tombstone, // Released, kept to detect double frees
}

/// A block seen by [`TrackingAlloc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedBlock {
    pub size: usize,
    pub align: usize,
    pub state: BlockState,
}

/// Misuse caught by [`TrackingAlloc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocFault {
    DoubleFree { address: Address },
    InvalidFree { address: Address },
}

/// Allocator wrapper that records every request and release
#[derive(Debug)]
pub struct TrackingAlloc<A: GlobalAlloc> {
    inner: A,
    blocks: RefCell<FxHashMap<Address, TrackedBlock>>,
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    faults: RefCell<Vec<AllocFault>>,
}

impl<A: GlobalAlloc> TrackingAlloc<A> {
    pub fn new(inner: A) -> Self {
        TrackingAlloc {
            inner,
            blocks: RefCell::new(FxHashMap::default()),
            allocations: Cell::new(0),
            deallocations: Cell::new(0),
            faults: RefCell::new(Vec::new()),
        }
    }

    /// Successful allocation requests so far
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    /// Releases forwarded to the inner allocator so far
    pub fn deallocations(&self) -> usize {
        self.deallocations.get()
    }

    /// Blocks currently allocated
    pub fn live_blocks(&self) -> usize {
        self.blocks
            .borrow()
            .values()
            .filter(|b| b.state == BlockState::Allocated)
            .count()
    }

    /// Bytes currently allocated
    pub fn live_bytes(&self) -> usize {
        self.blocks
            .borrow()
            .values()
            .filter(|b| b.state == BlockState::Allocated)
            .map(|b| b.size)
            .sum()
    }

    /// Look up a block by its base address (includes tombstones)
    pub fn block(&self, addr: Address) -> Option<TrackedBlock> {
        self.blocks.borrow().get(&addr).copied()
    }

    pub fn faults(&self) -> Vec<AllocFault> {
        self.faults.borrow().clone()
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for TrackingAlloc<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            self.allocations.set(self.allocations.get() + 1);
            // A tombstone at a reused address is simply replaced
            self.blocks.borrow_mut().insert(
                ptr as Address,
                TrackedBlock {
                    size: layout.size(),
                    align: layout.align(),
                    state: BlockState::Allocated,
                },
            );
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let address = ptr as Address;
        let mut blocks = self.blocks.borrow_mut();
        match blocks.get_mut(&address) {
            Some(block) if block.state == BlockState::Allocated => {
                block.state = BlockState::Tombstone;
                self.deallocations.set(self.deallocations.get() + 1);
                self.inner.dealloc(ptr, layout);
            }
            Some(_) => self
                .faults
                .borrow_mut()
                .push(AllocFault::DoubleFree { address }),
            None => self
                .faults
                .borrow_mut()
                .push(AllocFault::InvalidFree { address }),
        }
    }
}

/// Allocator wrapper with a hard byte limit
#[derive(Debug)]
pub struct LimitedAlloc<A: GlobalAlloc> {
    inner: A,
    limit: usize,
    in_use: Cell<usize>,
    refused: Cell<usize>,
}

impl<A: GlobalAlloc> LimitedAlloc<A> {
    pub fn new(inner: A, limit: usize) -> Self {
        LimitedAlloc {
            inner,
            limit,
            in_use: Cell::new(0),
            refused: Cell::new(0),
        }
    }

    /// Allocator that refuses every request
    pub fn failing(inner: A) -> Self {
        Self::new(inner, 0)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn in_use(&self) -> usize {
        self.in_use.get()
    }

    /// Requests turned down so far
    pub fn refused(&self) -> usize {
        self.refused.get()
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for LimitedAlloc<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let wanted = self.in_use.get().saturating_add(layout.size());
        if wanted > self.limit {
            self.refused.set(self.refused.get() + 1);
            return std::ptr::null_mut();
        }

        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            self.in_use.set(wanted);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.in_use
            .set(self.in_use.get().saturating_sub(layout.size()));
        self.inner.dealloc(ptr, layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::alloc::System;

    fn int_layout() -> Layout {
        Layout::new::<u32>()
    }

    #[test]
    fn test_tracking_counts_alloc_and_free() {
        let tracker = TrackingAlloc::new(System);
        unsafe {
            let p = tracker.alloc(int_layout());
            assert!(!p.is_null());
            assert_eq!(tracker.live_bytes(), 4);
            tracker.dealloc(p, int_layout());
        }
        assert_eq!(tracker.allocations(), 1);
        assert_eq!(tracker.deallocations(), 1);
        assert_eq!(tracker.live_blocks(), 0);
    }

    #[test]
    fn test_tracking_records_double_free() {
        let tracker = TrackingAlloc::new(System);
        let addr;
        unsafe {
            let p = tracker.alloc(int_layout());
            addr = p as Address;
            tracker.dealloc(p, int_layout());
            // Second release is recorded and not forwarded
            tracker.dealloc(p, int_layout());
        }
        assert_eq!(tracker.deallocations(), 1);
        assert_eq!(tracker.faults(), vec![AllocFault::DoubleFree { address: addr }]);
        assert_eq!(
            tracker.block(addr).map(|b| b.state),
            Some(BlockState::Tombstone)
        );
    }

    #[test]
    fn test_tracking_records_invalid_free() {
        let tracker = TrackingAlloc::new(System);
        let mut local = 0u32;
        let p = &mut local as *mut u32 as *mut u8;
        unsafe { tracker.dealloc(p, int_layout()) };
        assert_eq!(
            tracker.faults(),
            vec![AllocFault::InvalidFree {
                address: p as Address
            }]
        );
        assert_eq!(tracker.deallocations(), 0);
    }

    #[test]
    fn test_limited_refuses_over_limit() {
        let limited = LimitedAlloc::new(System, 8);
        unsafe {
            let a = limited.alloc(Layout::new::<u64>());
            assert!(!a.is_null());
            assert!(limited.alloc(int_layout()).is_null());
            assert_eq!(limited.refused(), 1);

            limited.dealloc(a, Layout::new::<u64>());
            assert_eq!(limited.in_use(), 0);
        }
    }

    #[test]
    fn test_failing_refuses_everything() {
        let failing = LimitedAlloc::failing(System);
        assert!(unsafe { failing.alloc(int_layout()) }.is_null());
        assert_eq!(failing.limit(), 0);
        assert_eq!(failing.refused(), 1);
    }
}
