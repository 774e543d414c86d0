//! Memory region demo
//!
//! This module provides the demo procedure:
//! - [`engine`]: [`MemoryRegionDemo`](engine::MemoryRegionDemo) and its exit status
//! - [`errors`]: The allocation failure error
//! - [`constants`]: Buffer sizes, fill values and exit codes
//!
//! # Run Order
//!
//! 1. Fill the stack buffer
//! 2. Request, check and fill the heap buffer
//! 3. List both buffers with element addresses
//! 4. Print both base addresses and their byte distance
//! 5. Release the heap buffer

pub mod constants;
pub mod engine;
pub mod errors;
