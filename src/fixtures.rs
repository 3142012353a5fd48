//! Batch fixture generation and JSON export.
//!
//! ```yaml
//! # catalog.yaml
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
//!
//! ```ignore
//! let mut builder = FixtureBuilder::from_files("catalog.yaml", Some("faker.yaml"))?;
//! let mut out = std::io::stdout().lock();
//! builder.write_jsonl("User", 100, &mut out)?;
//! ```

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use faker_core::{ShapeCatalog, Value};
use faker_generator::{Faker, FakerConfig};
use serde_json::{Map, Number};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Generates batches of records described by a [`ShapeCatalog`].
#[derive(Debug)]
pub struct FixtureBuilder {
    catalog: ShapeCatalog,
    faker: Faker,
}

impl FixtureBuilder {
    /// Create a builder from an in-memory catalog and configuration.
    pub fn new(catalog: ShapeCatalog, config: FakerConfig) -> Result<Self> {
        let faker = Faker::from_config(config).context("Invalid faker configuration")?;
        Ok(Self { catalog, faker })
    }

    /// Load the catalog and, optionally, the configuration from YAML files.
    pub fn from_files<P, Q>(catalog_path: P, config_path: Option<Q>) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let catalog_path = catalog_path.as_ref();
        let catalog = ShapeCatalog::from_file(catalog_path).with_context(|| {
            format!("Failed to load catalog from '{}'", catalog_path.display())
        })?;

        let config = match config_path {
            Some(path) => {
                let path = path.as_ref();
                FakerConfig::from_file(path).with_context(|| {
                    format!("Failed to load faker config from '{}'", path.display())
                })?
            }
            None => FakerConfig::default(),
        };

        Self::new(catalog, config)
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// The underlying session, e.g. to register providers.
    pub fn faker_mut(&mut self) -> &mut Faker {
        &mut self.faker
    }

    /// Generate `count` instances of `record`.
    pub fn generate(&mut self, record: &str, count: usize) -> Result<Vec<Value>> {
        let shape = self.catalog.record_shape(record)?;
        let pointer = faker_core::Shape::pointer(shape.clone());
        info!("Generating {count} '{record}' fixtures");

        let mut rows = Vec::with_capacity(count);
        for index in 0..count {
            let mut target = Value::Pointer(Some(Box::new(shape.zero_value())));
            self.faker
                .fake(&pointer, &mut target)
                .with_context(|| format!("Failed to generate '{record}' #{index}"))?;
            if let Some(row) = target.into_pointee() {
                rows.push(row);
            }
        }

        debug!("Generated {} '{record}' fixtures", rows.len());
        Ok(rows)
    }

    /// Generate `count` instances of `record` as JSON.
    pub fn generate_json(&mut self, record: &str, count: usize) -> Result<Vec<serde_json::Value>> {
        Ok(self
            .generate(record, count)?
            .iter()
            .map(value_to_json)
            .collect())
    }

    /// Write `count` instances of `record` as JSON lines.
    ///
    /// Returns the number of lines written.
    pub fn write_jsonl<W: Write>(&mut self, record: &str, count: usize, writer: &mut W) -> Result<usize> {
        let rows = self.generate_json(record, count)?;
        for row in &rows {
            serde_json::to_writer(&mut *writer, row)?;
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(rows.len())
    }
}

/// Convert a value tree to JSON.
///
/// Timestamps render as RFC 3339; nil collections and pointers become
/// `null`. Map keys that are not strings use their JSON text.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Bool(b) => Json::Bool(*b),
        Value::Int8(n) => Json::from(*n),
        Value::Int16(n) => Json::from(*n),
        Value::Int32(n) => Json::from(*n),
        Value::Int64(n) => Json::from(*n),
        Value::Uint8(n) => Json::from(*n),
        Value::Uint16(n) => Json::from(*n),
        Value::Uint32(n) => Json::from(*n),
        Value::Uint64(n) => Json::from(*n),
        Value::Float32(f) => float_to_json(f64::from(*f)),
        Value::Float64(f) => float_to_json(*f),
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) | Value::Slice(Some(items)) => {
            Json::Array(items.iter().map(value_to_json).collect())
        }
        Value::Map(Some(entries)) => {
            let mut map = Map::with_capacity(entries.len());
            for (k, v) in entries {
                let key = match k {
                    Value::String(s) => s.clone(),
                    other => value_to_json(other).to_string(),
                };
                map.insert(key, value_to_json(v));
            }
            Json::Object(map)
        }
        Value::Record(fields) => Json::Object(
            fields
                .iter()
                .map(|(name, v)| (name.clone(), value_to_json(v)))
                .collect(),
        ),
        Value::Pointer(Some(inner)) => value_to_json(inner),
        Value::Slice(None) | Value::Map(None) | Value::Pointer(None) => Json::Null,
        Value::Timestamp(ts) => Json::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
    }
}

fn float_to_json(f: f64) -> serde_json::Value {
    Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
