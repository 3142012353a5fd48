//! Core types for the fixture-faker framework.
//!
//! This crate provides the foundational types used across the faker
//! workspace, including:
//!
//! - [`Shape`] - Closed universe of type shapes the generator can fill
//! - [`Value`] - Runtime value tree mirroring a shape
//! - [`Fakeable`] - Bridge from plain Rust types to shapes and values
//! - [`Provider`] - Contract for named generation capabilities
//! - [`ShapeCatalog`] - Record shapes loaded from YAML
//!
//! # Architecture
//!
//! The faker-core crate sits at the foundation of the workspace:
//!
//! ```text
//! faker-core (this crate)
//!    │
//!    ├─── faker-providers   (built-in providers against the Provider contract)
//!    │
//!    └─── faker-generator   (tag parser, walker, registry, uniqueness)
//! ```
//!
//! # Example
//!
//! ```rust
//! use faker_core::{FieldShape, RecordShape, Shape, Value};
//!
//! let shape = Shape::Record(
//!     RecordShape::new("Sample")
//!         .field(FieldShape::new("id", Shape::Int64).with_tag("use=43"))
//!         .field(FieldShape::new("tags", Shape::slice(Shape::String))),
//! );
//!
//! let zero = shape.zero_value();
//! assert_eq!(zero.get_field("id"), Some(&Value::Int64(0)));
//! ```

pub mod catalog;
pub mod fakeable;
pub mod provider;
pub mod shape;
pub mod value;

// Re-exports for convenience
pub use catalog::{CatalogError, ShapeCatalog};
pub use fakeable::Fakeable;
pub use provider::{Provider, ProviderContext, ProviderError, ProviderResult};
pub use shape::{FieldShape, RecordShape, Shape};
pub use value::{insert_entry, Value, ValueError};
