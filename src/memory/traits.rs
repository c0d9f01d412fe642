/*!
 * Memory Traits
 * Allocator abstractions
 */

use super::types::*;
use crate::core::types::ClassSize;

/// Exact-fit allocator interface
pub trait Allocator: Send + Sync {
    /// Bind the oldest free block of exactly `size` KB to a process
    fn allocate(&self, process_id: &str, size: ClassSize) -> MemoryResult<Allocation>;

    /// Return a process's block to the tail of its size class
    fn deallocate(&self, process_id: &str) -> MemoryResult<Deallocation>;

    /// Check whether a process currently holds a block
    fn is_bound(&self, process_id: &str) -> bool;
}

/// Allocator state reporting
pub trait MemoryInfo: Send + Sync {
    /// Get a deterministic view of every pool and binding
    fn snapshot(&self) -> MemorySnapshot;

    /// Get aggregate counters over the current state
    fn stats(&self) -> MemoryStats;
}
