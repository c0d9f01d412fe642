/*!
 * Allocation Operations
 * Exact-fit allocation and deallocation logic
 */

use super::bindings::Binding;
use super::QuickFitManager;
use crate::core::types::ClassSize;
use crate::memory::types::{Allocation, Deallocation, MemoryError, MemoryResult};
use log::{info, warn};

impl QuickFitManager {
    /// Bind the oldest free block of exactly `size` KB to a process.
    ///
    /// No splitting and no search across other classes: an exact match or
    /// nothing. A process that already holds a block must deallocate before
    /// requesting again.
    pub fn allocate(&self, process_id: &str, size: ClassSize) -> MemoryResult<Allocation> {
        let mut state = self.state.write();

        if let Some(held) = state.bindings.get(process_id) {
            warn!(
                "Process {} requested {} KB while holding {} ({} KB)",
                process_id, size, held.block, held.size
            );
            return Err(MemoryError::ProcessAlreadyBound {
                process_id: process_id.to_string(),
                block: held.block.clone(),
            });
        }

        let Some(block) = state.pools.take_oldest(size) else {
            warn!(
                "No exact block for process {} requiring {} KB",
                process_id, size
            );
            return Err(MemoryError::NoExactBlockAvailable {
                process_id: process_id.to_string(),
                size,
            });
        };

        state.bindings.bind(
            process_id.to_string(),
            Binding {
                block: block.clone(),
                size,
            },
        );

        info!("Allocated {} ({} KB) to process {}", block, size, process_id);

        Ok(Allocation {
            process_id: process_id.to_string(),
            block,
            size,
        })
    }

    /// Return a process's block to the tail of its size class.
    ///
    /// The class is created on first reference, so a block always has a pool
    /// to go back to.
    pub fn deallocate(&self, process_id: &str) -> MemoryResult<Deallocation> {
        let mut state = self.state.write();

        let Some(binding) = state.bindings.unbind(process_id) else {
            warn!("No allocation found for process {}", process_id);
            return Err(MemoryError::NoAllocationFound {
                process_id: process_id.to_string(),
            });
        };

        state.pools.release(binding.size, binding.block.clone());

        info!(
            "Deallocated {} ({} KB) from process {}",
            binding.block, binding.size, process_id
        );

        Ok(Deallocation {
            process_id: process_id.to_string(),
            block: binding.block,
            size: binding.size,
        })
    }

    /// Check whether a process currently holds a block.
    #[must_use]
    pub fn is_bound(&self, process_id: &str) -> bool {
        self.state.read().bindings.contains(process_id)
    }
}
