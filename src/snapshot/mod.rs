// Captured report output and region views

use crate::memory::{byte_distance, Address, AddressRange, Element};

/// Captured report output
///
/// The demo never writes to stdout itself; binaries print the transcript,
/// tests inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript {
            text: String::new(),
        }
    }

    /// Print followed by a newline
    pub fn println(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    /// Raw captured text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let mut result: Vec<String> = self.text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }

    pub fn contains_line(&self, line: &str) -> bool {
        self.text.lines().any(|l| l == line)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Where a region's storage comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Stack,
    Heap,
}

/// One element as seen at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementView {
    pub index: usize,
    pub value: Element,
    pub address: Address,
}

/// A buffer's elements and the bytes it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionView {
    pub label: &'static str,
    pub kind: RegionKind,
    pub elements: Vec<ElementView>,
    pub range: AddressRange,
}

impl RegionView {
    /// Build a view from a slice that is still live
    pub fn capture(label: &'static str, kind: RegionKind, elements: &[Element]) -> Self {
        let views = elements
            .iter()
            .enumerate()
            .map(|(index, value)| ElementView {
                index,
                value: *value,
                address: value as *const Element as Address,
            })
            .collect();
        RegionView {
            label,
            kind,
            elements: views,
            range: AddressRange::for_elements(elements.as_ptr() as Address, elements.len()),
        }
    }

    pub fn base_address(&self) -> Address {
        self.range.base
    }

    pub fn values(&self) -> Vec<Element> {
        self.elements.iter().map(|e| e.value).collect()
    }
}

/// Both regions captured while both were live
///
/// Addresses are diagnostic only; after the heap buffer is released they
/// no longer point at anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSnapshot {
    pub fixed: RegionView,
    pub dynamic: RegionView,
}

impl RegionSnapshot {
    pub fn new(fixed: RegionView, dynamic: RegionView) -> Self {
        RegionSnapshot { fixed, dynamic }
    }

    /// Heap base minus stack base, in bytes
    pub fn byte_distance(&self) -> i64 {
        byte_distance(self.fixed.base_address(), self.dynamic.base_address())
    }

    /// Whether the two regions share no byte
    pub fn regions_disjoint(&self) -> bool {
        !self.fixed.range.overlaps(&self.dynamic.range)
    }
}
