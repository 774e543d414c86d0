//! Fixed partition allocation
//!
//! Memory is split up front into partitions of fixed sizes. A process takes
//! the first free partition large enough to hold it (first fit) and owns all
//! of it; the unused tail of the partition is internal fragmentation.
//!
//! ```text
//! | 100 | 150 | 200 | 250 | 300 |
//!   P1(90) → partition 0, fragmentation 10
//! ```

use std::fmt;

/// Partition sizes used by the `memregions-partitions` scenario
pub const DEFAULT_PARTITION_SIZES: [usize; 5] = [100, 150, 200, 250, 300];

/// One fixed partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub size: usize,
    pub process: Option<String>,
    /// Unused units while occupied, zero while free
    pub fragmentation: usize,
}

impl Partition {
    fn new(size: usize) -> Self {
        Partition {
            size,
            process: None,
            fragmentation: 0,
        }
    }

    pub fn is_free(&self) -> bool {
        self.process.is_none()
    }
}

/// Where a process was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub partition_size: usize,
    pub fragmentation: usize,
}

/// Errors from partition requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// No free partition is large enough
    NoFit { process: String, size: usize },
    /// The process already owns a partition
    AlreadyResident { process: String },
    /// Release of a process that owns no partition
    NotFound { process: String },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionError::NoFit { process, size } => write!(
                f,
                "no partition available for process {} (size {})",
                process, size
            ),
            PartitionError::AlreadyResident { process } => {
                write!(f, "process {} already holds a partition", process)
            }
            PartitionError::NotFound { process } => write!(f, "process {} not found", process),
        }
    }
}

impl std::error::Error for PartitionError {}

/// Fixed partitions in address order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTable {
    partitions: Vec<Partition>,
}

impl Default for PartitionTable {
    fn default() -> Self {
        Self::new(&DEFAULT_PARTITION_SIZES)
    }
}

impl PartitionTable {
    pub fn new(sizes: &[usize]) -> Self {
        PartitionTable {
            partitions: sizes.iter().map(|&size| Partition::new(size)).collect(),
        }
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Place `process` in the first free partition that can hold `size` units
    pub fn allocate(&mut self, process: &str, size: usize) -> Result<Placement, PartitionError> {
        if self.position_of(process).is_some() {
            return Err(PartitionError::AlreadyResident {
                process: process.to_string(),
            });
        }

        let (index, partition) = self
            .partitions
            .iter_mut()
            .enumerate()
            .find(|(_, p)| p.is_free() && size <= p.size)
            .ok_or_else(|| PartitionError::NoFit {
                process: process.to_string(),
                size,
            })?;

        partition.process = Some(process.to_string());
        partition.fragmentation = partition.size - size;

        Ok(Placement {
            index,
            partition_size: partition.size,
            fragmentation: partition.fragmentation,
        })
    }

    /// Free the partition owned by `process`, returning its index
    pub fn release(&mut self, process: &str) -> Result<usize, PartitionError> {
        let index = self
            .position_of(process)
            .ok_or_else(|| PartitionError::NotFound {
                process: process.to_string(),
            })?;

        let partition = &mut self.partitions[index];
        partition.process = None;
        partition.fragmentation = 0;
        Ok(index)
    }

    /// Sum of internal fragmentation over occupied partitions
    pub fn total_fragmentation(&self) -> usize {
        self.partitions.iter().map(|p| p.fragmentation).sum()
    }

    fn position_of(&self, process: &str) -> Option<usize> {
        self.partitions
            .iter()
            .position(|p| p.process.as_deref() == Some(process))
    }
}

impl fmt::Display for PartitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.partitions.iter().enumerate() {
            let status = match &p.process {
                Some(name) => format!("OCCUPIED ({})", name),
                None => "FREE".to_string(),
            };
            writeln!(
                f,
                "Partition {} - Size: {} - {} - Internal fragmentation: {}",
                i + 1,
                p.size,
                status,
                p.fragmentation
            )?;
        }
        Ok(())
    }
}
