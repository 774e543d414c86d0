// Integration tests for the memory region demo

use memregions::demo::engine::{ExitStatus, MemoryRegionDemo};
use memregions::demo::errors::DemoError;
use memregions::memory::alloc::{LimitedAlloc, TrackingAlloc};
use memregions::memory::ELEMENT_SIZE;
use memregions::snapshot::RegionKind;
use std::alloc::System;
use std::process::Command;

#[test]
fn test_fixed_buffer_values() {
    let mut demo = MemoryRegionDemo::new(&System);
    assert_eq!(demo.run(), ExitStatus::Success);

    let fixed = &demo.snapshot().expect("snapshot missing").fixed;
    assert_eq!(fixed.kind, RegionKind::Stack);
    assert_eq!(fixed.elements.len(), 5);
    for element in &fixed.elements {
        assert_eq!(element.value, element.index as i32 + 1);
    }
}

#[test]
fn test_dynamic_buffer_values() {
    let mut demo = MemoryRegionDemo::new(&System);
    assert_eq!(demo.run(), ExitStatus::Success);

    let dynamic = &demo.snapshot().expect("snapshot missing").dynamic;
    assert_eq!(dynamic.kind, RegionKind::Heap);
    assert_eq!(dynamic.elements.len(), 10);
    for element in &dynamic.elements {
        assert_eq!(element.value, 10 + element.index as i32);
    }
}

#[test]
fn test_regions_are_disjoint() {
    let mut demo = MemoryRegionDemo::new(&System);
    demo.run();
    let snapshot = demo.snapshot().expect("snapshot missing");

    assert_ne!(snapshot.fixed.base_address(), snapshot.dynamic.base_address());
    assert_eq!(snapshot.fixed.range.len_bytes, 5 * ELEMENT_SIZE);
    assert_eq!(snapshot.dynamic.range.len_bytes, 10 * ELEMENT_SIZE);
    assert!(snapshot.regions_disjoint());

    // Only the relation to the bases is fixed, never the value itself
    let expected =
        snapshot.dynamic.base_address() as i64 - snapshot.fixed.base_address() as i64;
    assert_eq!(snapshot.byte_distance(), expected);
}

#[test]
fn test_report_lines_in_order() {
    let mut demo = MemoryRegionDemo::new(&System);
    assert_eq!(demo.run(), ExitStatus::Success);

    let output = demo.terminal().get_output();
    let position = |prefix: &str| {
        output
            .iter()
            .position(|line| line.starts_with(prefix))
            .unwrap_or_else(|| panic!("missing line starting with {:?}", prefix))
    };

    let first_fixed = position("stack_array[0] = 1 ");
    let last_fixed = position("stack_array[4] = 5 ");
    let first_dynamic = position("heap_array[0] = 10 ");
    let last_dynamic = position("heap_array[9] = 19 ");
    let fixed_base = position("Base address stack_array: 0x");
    let dynamic_base = position("Base address heap_array: 0x");
    let distance = position("Distance (bytes): ");
    let released = position("Heap memory released successfully.");

    assert!(first_fixed < last_fixed);
    assert!(last_fixed < first_dynamic);
    assert!(first_dynamic < last_dynamic);
    assert!(last_dynamic < fixed_base);
    assert!(fixed_base < dynamic_base);
    assert!(dynamic_base < distance);
    assert!(distance < released);
    assert_eq!(released, output.len() - 1);
}

#[test]
fn test_listing_addresses_match_snapshot() {
    let mut demo = MemoryRegionDemo::new(&System);
    demo.run();
    let snapshot = demo.snapshot().expect("snapshot missing").clone();

    for element in &snapshot.dynamic.elements {
        let line = format!(
            "heap_array[{}] = {} \t Address: 0x{:x}",
            element.index, element.value, element.address
        );
        assert!(demo.terminal().contains_line(&line), "missing {:?}", line);
    }
}

#[test]
fn test_exactly_one_release() {
    let tracker = TrackingAlloc::new(System);
    let mut demo = MemoryRegionDemo::new(&tracker);
    assert_eq!(demo.run(), ExitStatus::Success);

    assert_eq!(tracker.allocations(), 1);
    assert_eq!(tracker.deallocations(), 1);
    assert_eq!(tracker.live_bytes(), 0);
    assert!(tracker.faults().is_empty());

    // The block the report listed is the block that was released
    let base = demo.snapshot().expect("snapshot missing").dynamic.base_address();
    let block = tracker.block(base).expect("block not tracked");
    assert_eq!(block.size, 10 * ELEMENT_SIZE);
}

#[test]
fn test_allocation_failure_path() {
    let failing = LimitedAlloc::failing(System);
    let mut demo = MemoryRegionDemo::new(&failing);
    let status = demo.run();

    assert_eq!(status, ExitStatus::AllocationFailure);
    assert_eq!(status.code(), 1);
    assert_eq!(failing.refused(), 1);
    assert_eq!(
        demo.error(),
        Some(&DemoError::AllocationFailure {
            requested_bytes: 10 * ELEMENT_SIZE,
            align: std::mem::align_of::<i32>(),
        })
    );

    let output = demo.terminal().as_str();
    assert!(!output.contains("heap_array["));
    assert!(!output.contains("released"));
}

#[test]
fn test_limit_just_below_request_fails() {
    let limited = LimitedAlloc::new(System, 10 * ELEMENT_SIZE - 1);
    let mut demo = MemoryRegionDemo::new(&limited);
    assert_eq!(demo.run(), ExitStatus::AllocationFailure);

    let roomy = LimitedAlloc::new(System, 10 * ELEMENT_SIZE);
    let mut demo = MemoryRegionDemo::new(&roomy);
    assert_eq!(demo.run(), ExitStatus::Success);
    assert_eq!(roomy.in_use(), 0);
}

#[test]
fn test_binary_prints_report_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_memregions"))
        .output()
        .expect("failed to run memregions");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stack_array[0] = 1 \t Address: 0x"));
    assert!(stdout.contains("heap_array[9] = 19 \t Address: 0x"));
    assert!(stdout.trim_end().ends_with("Heap memory released successfully."));
}
