//! Session configuration.
//!
//! ```yaml
//! random_string_len: 12
//! number_boundary:
//!   start: 1
//!   end: 1000
//! collection_size: 5
//! fixed_collection_size: true
//! nil_on_empty: false
//! unique_mode: false
//! seed: 42
//! ```
//!
//! Every key is optional and falls back to its default.

use crate::error::FakerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Half-open integer range `[start, end)`.
///
/// `start == end` denotes the single value `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberBoundary {
    pub start: i64,
    pub end: i64,
}

impl NumberBoundary {
    /// Create a boundary, rejecting `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self, FakerError> {
        let boundary = Self { start, end };
        boundary.validate()?;
        Ok(boundary)
    }

    /// Check that `start <= end`.
    pub fn validate(&self) -> Result<(), FakerError> {
        if self.start > self.end {
            return Err(FakerError::InvalidBoundary {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Default for NumberBoundary {
    fn default() -> Self {
        Self { start: 0, end: 100 }
    }
}

/// Configuration read by every synthesis step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FakerConfig {
    /// Length of untagged random strings
    pub random_string_len: usize,

    /// Range of untagged random integers
    pub number_boundary: NumberBoundary,

    /// Collection length, or the exclusive bound of a random length
    pub collection_size: usize,

    /// Use `collection_size` as-is instead of drawing below it
    pub fixed_collection_size: bool,

    /// Leave empty slices and maps nil instead of allocating them
    pub nil_on_empty: bool,

    /// Retry single-provider draws until unseen
    pub unique_mode: bool,

    /// RNG seed, drawn from the OS when absent
    pub seed: Option<u64>,

    /// Test switch: every collection comes out empty
    #[doc(hidden)]
    #[serde(skip)]
    pub force_empty_collections: bool,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            random_string_len: 25,
            number_boundary: NumberBoundary::default(),
            collection_size: 100,
            fixed_collection_size: false,
            nil_on_empty: false,
            unique_mode: false,
            seed: None,
            force_empty_collections: false,
        }
    }
}

impl FakerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FakerError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, FakerError> {
        let config: FakerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the setters enforce.
    pub fn validate(&self) -> Result<(), FakerError> {
        self.number_boundary.validate()
    }
}

/// Convert a signed size, rejecting negatives.
pub(crate) fn non_negative(size: i64) -> Result<usize, FakerError> {
    usize::try_from(size).map_err(|_| FakerError::NegativeSize(size))
}
