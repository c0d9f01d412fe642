/*!
 * Process Bindings
 * Binding-ordered map from process id to the block it holds
 */

use crate::core::types::{BlockName, ClassSize, ProcessId};
use ahash::RandomState;
use std::collections::HashMap;

/// An active process-to-block binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Binding {
    pub block: BlockName,
    pub size: ClassSize,
}

/// Table of active bindings.
///
/// At most one binding per process id; `order` records binding order so a
/// process re-bound after a deallocation reports at the tail.
#[derive(Debug)]
pub(super) struct BindingTable {
    bindings: HashMap<ProcessId, Binding, RandomState>,
    order: Vec<ProcessId>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::default(),
            order: Vec::new(),
        }
    }

    pub fn get(&self, process_id: &str) -> Option<&Binding> {
        self.bindings.get(process_id)
    }

    pub fn contains(&self, process_id: &str) -> bool {
        self.bindings.contains_key(process_id)
    }

    /// Insert a binding for a process with no active binding.
    pub fn bind(&mut self, process_id: ProcessId, binding: Binding) {
        debug_assert!(!self.bindings.contains_key(&process_id));
        self.order.push(process_id.clone());
        self.bindings.insert(process_id, binding);
    }

    /// Remove and return a process's binding.
    pub fn unbind(&mut self, process_id: &str) -> Option<Binding> {
        let binding = self.bindings.remove(process_id)?;
        self.order.retain(|p| p.as_str() != process_id);
        Some(binding)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Iterate bindings in binding order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&ProcessId, &Binding)> + '_ {
        self.order.iter().map(move |p| (p, &self.bindings[p]))
    }
}
