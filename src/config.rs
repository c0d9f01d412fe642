/*!
 * Seed Configuration
 * Initial class layouts, JSON loading, and validation
 */

use crate::core::types::{BlockName, ClassSize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed layout: {0}")]
    Invalid(String),
}

/// One seeded size class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SeedEntry {
    pub size: ClassSize,
    pub blocks: Vec<BlockName>,
}

/// Ordered seed layout for the allocator's pools.
///
/// The on-disk format is a JSON array of `{"size": N, "blocks": [...]}`
/// entries; an array keeps the class introduction order explicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedLayout {
    entries: Vec<SeedEntry>,
}

impl SeedLayout {
    pub fn new(entries: Vec<SeedEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The layout the simulator ships with.
    pub fn default_layout() -> Self {
        Self::new(vec![
            SeedEntry {
                size: 50,
                blocks: vec!["Block1".into(), "Block2".into()],
            },
            SeedEntry {
                size: 100,
                blocks: vec!["Block3".into(), "Block4".into()],
            },
            SeedEntry {
                size: 200,
                blocks: vec!["Block5".into()],
            },
        ])
    }

    /// Load and validate a layout from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&raw)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject layouts that would break block identity at birth: every block
    /// name must be non-empty and unique across the whole layout, every
    /// class size positive and listed once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen_classes = HashSet::new();
        let mut seen_blocks = HashSet::new();

        for entry in &self.entries {
            if entry.size == 0 {
                return Err(ConfigError::Invalid(
                    "size class must be a positive number of KB".into(),
                ));
            }
            if !seen_classes.insert(entry.size) {
                return Err(ConfigError::Invalid(format!(
                    "size class {} listed twice",
                    entry.size
                )));
            }
            for block in &entry.blocks {
                if block.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "class {} contains an empty block name",
                        entry.size
                    )));
                }
                if !seen_blocks.insert(block.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "block name {} appears more than once",
                        block
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[SeedEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<SeedEntry> {
        self.entries
    }
}
