/*!
 * Core Module
 * Shared primitives for the allocator and its callers
 */

pub mod types;

pub use types::{BlockName, ClassSize, ProcessId};
