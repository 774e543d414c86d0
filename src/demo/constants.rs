// Constants for the memory region demo

use std::num::NonZeroUsize;

/// Number of elements in the stack buffer
pub const FIXED_LEN: usize = 5;

/// Number of elements requested for the heap buffer
pub const DYNAMIC_LEN: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => panic!("heap buffer length must be non-zero"),
};

/// Stack element `i` holds `FIXED_FIRST_VALUE + i`
pub const FIXED_FIRST_VALUE: i32 = 1;

/// Heap element `i` holds `DYNAMIC_FIRST_VALUE + i`
pub const DYNAMIC_FIRST_VALUE: i32 = 10;

/// Name printed for the stack buffer
pub const FIXED_LABEL: &str = "stack_array";

/// Name printed for the heap buffer
pub const DYNAMIC_LABEL: &str = "heap_array";

/// Process exit code after a complete run
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit code when the heap request is refused
pub const EXIT_ALLOCATION_FAILURE: u8 = 1;
