//! The memory region demo procedure
//!
//! [`MemoryRegionDemo`] owns no memory of its own. Each run builds a
//! [`FixedBuffer`] in its own stack frame, asks the configured allocator for a
//! [`DynamicBuffer`], writes the report into a [`Transcript`], and releases
//! the heap block before returning.

use super::constants::{
    DYNAMIC_FIRST_VALUE, DYNAMIC_LABEL, DYNAMIC_LEN, EXIT_ALLOCATION_FAILURE, EXIT_SUCCESS,
    FIXED_FIRST_VALUE, FIXED_LABEL, FIXED_LEN,
};
use super::errors::DemoError;
use crate::memory::heap::DynamicBuffer;
use crate::memory::stack::FixedBuffer;
use crate::memory::Element;
use crate::snapshot::{RegionKind, RegionSnapshot, RegionView, Transcript};
use std::alloc::GlobalAlloc;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    AllocationFailure,
}

impl ExitStatus {
    /// Process exit code
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => EXIT_SUCCESS,
            ExitStatus::AllocationFailure => EXIT_ALLOCATION_FAILURE,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

impl From<&DemoError> for ExitStatus {
    fn from(err: &DemoError) -> Self {
        match err {
            DemoError::AllocationFailure { .. } => ExitStatus::AllocationFailure,
        }
    }
}

/// Stack vs heap demo over a chosen allocator
pub struct MemoryRegionDemo<'a, A: GlobalAlloc> {
    allocator: &'a A,
    terminal: Transcript,
    snapshot: Option<RegionSnapshot>,
    error: Option<DemoError>,
}

impl<'a, A: GlobalAlloc> MemoryRegionDemo<'a, A> {
    pub fn new(allocator: &'a A) -> Self {
        MemoryRegionDemo {
            allocator,
            terminal: Transcript::new(),
            snapshot: None,
            error: None,
        }
    }

    /// Run the demo and report how it ended
    ///
    /// Output from earlier runs is discarded.
    pub fn run(&mut self) -> ExitStatus {
        self.terminal = Transcript::new();
        self.snapshot = None;
        self.error = None;

        match self.try_run() {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                ExitStatus::Success
            }
            Err(err) => {
                self.terminal.println(&format!("Error: {}", err));
                let status = ExitStatus::from(&err);
                self.error = Some(err);
                status
            }
        }
    }

    /// Run the demo, returning the regions as they were before the release
    pub fn try_run(&mut self) -> Result<RegionSnapshot, DemoError> {
        let fixed: FixedBuffer<FIXED_LEN> =
            FixedBuffer::from_fn(|i| FIXED_FIRST_VALUE + i as Element);

        // Checked before the first write; the `?` leaves nothing behind
        let dynamic = DynamicBuffer::allocate_with(self.allocator, DYNAMIC_LEN, |i| {
            DYNAMIC_FIRST_VALUE + i as Element
        })?;

        let snapshot = RegionSnapshot::new(
            RegionView::capture(FIXED_LABEL, RegionKind::Stack, fixed.as_slice()),
            RegionView::capture(DYNAMIC_LABEL, RegionKind::Heap, dynamic.as_slice()),
        );

        self.terminal.println("=== STACK ARRAY ===");
        self.print_listing(&snapshot.fixed);

        self.terminal.println("");
        self.terminal.println("=== HEAP ARRAY ===");
        self.print_listing(&snapshot.dynamic);

        self.terminal.println("");
        self.terminal.println("=== BASE ADDRESS DISTANCE ===");
        self.terminal.println(&format!(
            "Base address {}: 0x{:x}",
            snapshot.fixed.label,
            fixed.base_address()
        ));
        self.terminal.println(&format!(
            "Base address {}: 0x{:x}",
            snapshot.dynamic.label,
            dynamic.base_address()
        ));
        // Illustrative only, varies between runs and platforms
        self.terminal
            .println(&format!("Distance (bytes): {}", snapshot.byte_distance()));

        dynamic.release();

        self.terminal.println("");
        self.terminal.println("Heap memory released successfully.");

        Ok(snapshot)
    }

    fn print_listing(&mut self, region: &RegionView) {
        for element in &region.elements {
            self.terminal.println(&format!(
                "{}[{}] = {} \t Address: 0x{:x}",
                region.label, element.index, element.value, element.address
            ));
        }
    }

    /// Report captured by the last run
    pub fn terminal(&self) -> &Transcript {
        &self.terminal
    }

    /// Regions captured by the last successful run
    pub fn snapshot(&self) -> Option<&RegionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Error that ended the last run, if any
    pub fn error(&self) -> Option<&DemoError> {
        self.error.as_ref()
    }
}
