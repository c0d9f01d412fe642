/*!
 * Quick Fit Manager
 * Size-class pools and process bindings behind a single lock
 */

mod allocator;
mod bindings;
mod pools;
mod snapshot;

use crate::config::SeedLayout;
use crate::core::types::ClassSize;
use crate::memory::traits::{Allocator, MemoryInfo};
use crate::memory::types::{Allocation, Deallocation, MemoryResult, MemorySnapshot, MemoryStats};
use bindings::BindingTable;
use log::info;
use parking_lot::RwLock;
use pools::ClassTable;
use std::sync::Arc;

/// Whole allocator state.
///
/// Every operation takes the lock exactly once, so concurrent callers each
/// observe a consistent pools/bindings pair.
struct AllocatorState {
    pools: ClassTable,
    bindings: BindingTable,
}

/// Quick fit memory manager
///
/// Owns all size-class pools and all active process bindings. Cloning shares
/// the underlying state.
pub struct QuickFitManager {
    state: Arc<RwLock<AllocatorState>>,
}

impl QuickFitManager {
    /// Create a manager with no seeded classes.
    pub fn new() -> Self {
        Self::with_seed(SeedLayout::empty())
    }

    /// Create a manager from a seed layout: one pool per entry, in layout
    /// order, with no active bindings.
    pub fn with_seed(layout: SeedLayout) -> Self {
        let mut pools = ClassTable::new();
        for entry in layout.into_entries() {
            pools.seed(entry.size, entry.blocks);
        }

        info!(
            "Quick fit manager initialized with {} size classes and {} free blocks",
            pools.class_count(),
            pools.free_blocks()
        );

        Self {
            state: Arc::new(RwLock::new(AllocatorState {
                pools,
                bindings: BindingTable::new(),
            })),
        }
    }
}

// Implement trait interfaces
impl Allocator for QuickFitManager {
    fn allocate(&self, process_id: &str, size: ClassSize) -> MemoryResult<Allocation> {
        QuickFitManager::allocate(self, process_id, size)
    }

    fn deallocate(&self, process_id: &str) -> MemoryResult<Deallocation> {
        QuickFitManager::deallocate(self, process_id)
    }

    fn is_bound(&self, process_id: &str) -> bool {
        QuickFitManager::is_bound(self, process_id)
    }
}

impl MemoryInfo for QuickFitManager {
    fn snapshot(&self) -> MemorySnapshot {
        QuickFitManager::snapshot(self)
    }

    fn stats(&self) -> MemoryStats {
        QuickFitManager::stats(self)
    }
}

impl Clone for QuickFitManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for QuickFitManager {
    fn default() -> Self {
        Self::new()
    }
}
