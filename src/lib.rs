//! # Introduction
//!
//! memregions fills one integer array on the call stack and one on the heap,
//! prints every element with its address, and shows how far apart the two
//! base addresses are. The heap block is requested, checked, filled and
//! released explicitly so each step of its lifetime can be observed.
//!
//! ## Run pipeline
//!
//! ```text
//! FixedBuffer → DynamicBuffer (alloc + null check) → Transcript → release
//!                                     ↓
//!                              RegionSnapshot → TUI
//! ```
//!
//! 1. [`memory`] — address helpers, the stack buffer, the heap buffer and the
//!    instrumented allocators used to observe or refuse heap requests, plus
//!    fixed partition and page replacement simulations.
//! 2. [`demo`] — [`demo::engine::MemoryRegionDemo`], which runs the procedure
//!    and reports an [`demo::engine::ExitStatus`].
//! 3. [`snapshot`] — the captured [`snapshot::Transcript`] and the
//!    [`snapshot::RegionSnapshot`] of both buffers.
//! 4. [`timing`] — stack vs heap allocation timing.
//! 5. [`ui`] — ratatui-based viewer; not part of the stable library API.
//!
//! ## Addresses
//!
//! Addresses and the distance between the two bases differ between runs and
//! platforms. They are printed for inspection and never relied on.

pub mod demo;
pub mod memory;
pub mod snapshot;
pub mod timing;
pub mod ui;
