/*!
 * State Reporting
 * Deterministic snapshots of pools and bindings
 */

use super::QuickFitManager;
use crate::memory::types::{BindingSnapshot, ClassSnapshot, MemorySnapshot, MemoryStats};

impl QuickFitManager {
    /// Get a point-in-time view of every pool and binding.
    ///
    /// Classes report in first-introduction order (including classes whose
    /// pool is currently empty), bindings in binding order. Read-only: two
    /// consecutive snapshots with no mutation in between are identical.
    #[must_use]
    pub fn snapshot(&self) -> MemorySnapshot {
        let state = self.state.read();

        let classes = state
            .pools
            .iter_ordered()
            .map(|(size, pool)| ClassSnapshot {
                size,
                free_blocks: pool.iter().cloned().collect(),
            })
            .collect();

        let bindings = state
            .bindings
            .iter_ordered()
            .map(|(process_id, binding)| BindingSnapshot {
                process_id: process_id.clone(),
                block: binding.block.clone(),
                size: binding.size,
            })
            .collect();

        MemorySnapshot { classes, bindings }
    }

    /// Get aggregate counters over the current state.
    #[must_use]
    pub fn stats(&self) -> MemoryStats {
        let state = self.state.read();

        MemoryStats {
            size_classes: state.pools.class_count(),
            free_blocks: state.pools.free_blocks(),
            active_bindings: state.bindings.len(),
        }
    }
}
