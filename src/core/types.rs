/*!
 * Core Types
 * Common types used across the simulator
 */

/// Size-class key, in kilobytes
pub type ClassSize = u32;

/// Block identifier; blocks are tracked by name, not content
pub type BlockName = String;

/// Process identifier, supplied by the caller
pub type ProcessId = String;
