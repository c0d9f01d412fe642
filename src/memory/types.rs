/*!
 * Memory Types
 * Common types for quick fit allocation
 */

use crate::core::types::{BlockName, ClassSize, ProcessId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// All variants are recoverable: the session continues after reporting them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("No exact block available for process {process_id} requiring {size} KB")]
    NoExactBlockAvailable {
        process_id: ProcessId,
        size: ClassSize,
    },

    #[error("No allocation found for process {process_id}")]
    NoAllocationFound { process_id: ProcessId },

    #[error("Process {process_id} already holds block {block}")]
    ProcessAlreadyBound {
        process_id: ProcessId,
        block: BlockName,
    },
}

/// Successful allocation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Allocation {
    pub process_id: ProcessId,
    pub block: BlockName,
    pub size: ClassSize,
}

/// Successful deallocation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Deallocation {
    pub process_id: ProcessId,
    pub block: BlockName,
    pub size: ClassSize,
}

/// One size class and its free sequence, oldest block first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassSnapshot {
    pub size: ClassSize,
    pub free_blocks: Vec<BlockName>,
}

/// One active process binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BindingSnapshot {
    pub process_id: ProcessId,
    pub block: BlockName,
    pub size: ClassSize,
}

/// Point-in-time view of the whole allocator state
///
/// Classes appear in first-introduction order, bindings in binding order,
/// so two snapshots taken with no mutation in between compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MemorySnapshot {
    pub classes: Vec<ClassSnapshot>,
    pub bindings: Vec<BindingSnapshot>,
}

impl fmt::Display for MemorySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available memory blocks:")?;
        if self.classes.is_empty() {
            writeln!(f, "  (no size classes)")?;
        }
        for class in &self.classes {
            if class.free_blocks.is_empty() {
                writeln!(f, "  {} KB: (empty)", class.size)?;
            } else {
                writeln!(f, "  {} KB: {}", class.size, class.free_blocks.join(", "))?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Allocated processes:")?;
        if self.bindings.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for binding in &self.bindings {
            writeln!(
                f,
                "  {}: {} ({} KB)",
                binding.process_id, binding.block, binding.size
            )?;
        }
        Ok(())
    }
}

/// Memory statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MemoryStats {
    pub size_classes: usize,
    pub free_blocks: usize,
    pub active_bindings: usize,
}
