/*!
 * Size-Class Pools
 * Insertion-ordered table of free-block sequences
 */

use crate::core::types::{BlockName, ClassSize};
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};

/// Table of size-class pools.
///
/// Each class owns a FIFO sequence of free block names: allocation pops the
/// front, deallocation pushes the back, so returned blocks are reused last.
/// Classes are created on first reference and never removed; `order` records
/// first-introduction order for deterministic reporting.
#[derive(Debug)]
pub(super) struct ClassTable {
    pools: HashMap<ClassSize, VecDeque<BlockName>, RandomState>,
    order: Vec<ClassSize>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self {
            pools: HashMap::default(),
            order: Vec::new(),
        }
    }

    /// Seed a class with its initial free blocks.
    pub fn seed(&mut self, size: ClassSize, blocks: impl IntoIterator<Item = BlockName>) {
        self.pool_mut(size).extend(blocks);
    }

    /// Remove the oldest free block of exactly `size`.
    ///
    /// A failed lookup leaves the table untouched: unknown classes are not
    /// created by allocation.
    pub fn take_oldest(&mut self, size: ClassSize) -> Option<BlockName> {
        self.pools.get_mut(&size).and_then(VecDeque::pop_front)
    }

    /// Append a block at the tail of its class, creating the class on first
    /// reference.
    pub fn release(&mut self, size: ClassSize, block: BlockName) {
        self.pool_mut(size).push_back(block);
    }

    pub fn class_count(&self) -> usize {
        self.order.len()
    }

    pub fn free_blocks(&self) -> usize {
        self.pools.values().map(VecDeque::len).sum()
    }

    /// Iterate classes in first-introduction order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (ClassSize, &VecDeque<BlockName>)> + '_ {
        self.order.iter().map(move |size| (*size, &self.pools[size]))
    }

    fn pool_mut(&mut self, size: ClassSize) -> &mut VecDeque<BlockName> {
        if !self.pools.contains_key(&size) {
            self.order.push(size);
        }
        self.pools.entry(size).or_default()
    }
}
