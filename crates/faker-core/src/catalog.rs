//! Record catalogs loaded from YAML.
//!
//! A catalog is a named collection of record shapes, each field carrying
//! its own annotation text. It is the file-driven way to describe fixtures
//! when no Rust type exists for them.
//!
//! ```yaml
//! version: 1
//! records:
//!   - name: User
//!     fields:
//!       - name: id
//!         type: int64
//!         tag: "unique,boundary_start=1,boundary_end=100000"
//!       - name: email
//!         type: string
//!         tag: email
//! ```

use crate::shape::{RecordShape, Shape};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading catalog file
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Record not found in catalog
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

fn default_version() -> u32 {
    1
}

/// Collection of record shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeCatalog {
    /// Catalog version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Record definitions
    pub records: Vec<RecordShape>,

    /// Cached record lookup (not serialized)
    #[serde(skip)]
    record_map: HashMap<String, usize>,
}

impl ShapeCatalog {
    /// Create a catalog from a list of record shapes.
    pub fn new(records: Vec<RecordShape>) -> Self {
        let mut catalog = Self {
            version: default_version(),
            records,
            record_map: HashMap::new(),
        };
        catalog.build_record_map();
        catalog
    }

    /// Load catalog from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse catalog from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let mut catalog: ShapeCatalog = serde_yaml::from_str(yaml)?;
        catalog.build_record_map();
        Ok(catalog)
    }

    /// Build the internal record lookup map.
    fn build_record_map(&mut self) {
        self.record_map = self
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.name.clone(), idx))
            .collect();
    }

    /// Get a record shape by name.
    pub fn get_record(&self, name: &str) -> Option<&RecordShape> {
        self.record_map
            .get(name)
            .and_then(|&idx| self.records.get(idx))
    }

    /// Get a record as a [`Shape`], ready to hand to the generator.
    pub fn record_shape(&self, name: &str) -> Result<Shape, CatalogError> {
        self.get_record(name)
            .cloned()
            .map(Shape::Record)
            .ok_or_else(|| CatalogError::RecordNotFound(name.to_string()))
    }

    /// Get all record names in the catalog.
    pub fn record_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Add a record to the catalog.
    pub fn add_record(&mut self, record: RecordShape) {
        let idx = self.records.len();
        self.record_map.insert(record.name.clone(), idx);
        self.records.push(record);
    }
}
