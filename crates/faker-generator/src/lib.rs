//! Tag-driven recursive value synthesis.
//!
//! This crate provides the [`Faker`] session, which fills an arbitrary
//! [`Shape`](faker_core::Shape) with random data. Per-field annotations
//! override the default synthesis with literals, providers, ranges,
//! string lengths, pass-through or uniqueness constraints.
//!
//! # Architecture
//!
//! ```text
//! Faker::fake(&shape, &mut target)
//!        │
//!        ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │      Walker      │────▶│ Directive::parse │
//! │                  │     └──────────────────┘
//! │  - config        │     ┌──────────────────┐
//! │  - rng (StdRng)  │────▶│ ProviderRegistry │
//! │  - registry      │     └──────────────────┘
//! │  - unique        │     ┌──────────────────┐
//! └────────┬─────────┘────▶│  UniqueTracker   │
//!          │               └──────────────────┘
//!          ▼
//!     generators::*  (strings, numbers, timestamps, lengths)
//! ```
//!
//! # Example
//!
//! ```rust
//! use faker_core::{FieldShape, RecordShape, Shape, Value};
//! use faker_generator::Faker;
//!
//! let record = RecordShape::new("User")
//!     .field(FieldShape::new("id", Shape::Int64).with_tag("boundary_start=10,boundary_end=11"))
//!     .field(FieldShape::new("name", Shape::String).with_tag("use=hello"))
//!     .field(FieldShape::new("email", Shape::String).with_tag("email"));
//! let shape = Shape::pointer(Shape::Record(record.clone()));
//!
//! let mut faker = Faker::seeded(42);
//! let mut target = Value::Pointer(Some(Box::new(Shape::Record(record).zero_value())));
//! faker.fake(&shape, &mut target).unwrap();
//!
//! let user = target.as_pointee().unwrap();
//! assert_eq!(user.get_field("id"), Some(&Value::Int64(10)));
//! assert_eq!(user.get_field("name"), Some(&Value::String("hello".into())));
//! ```
//!
//! # Annotations
//!
//! - `use=<literal>` - literal parsed into the field
//! - `len=<n>` - random string of `n` letters
//! - `boundary_start=<a>,boundary_end=<b>` - number in `[a, b)`
//! - `-` - keep the current value
//! - `keep` - keep the current value unless it is zero
//! - `unique` - never repeat a value for this annotation
//! - any registered provider name, e.g. `email` or `uuid_digit`

pub mod config;
pub mod directive;
pub mod error;
pub mod faker;
pub mod generators;
pub mod registry;
pub mod unique;
mod walker;

// Re-exports for convenience
pub use config::{FakerConfig, NumberBoundary};
pub use directive::{Directive, Expression, TagError};
pub use error::FakerError;
pub use faker::Faker;
pub use registry::ProviderRegistry;
pub use unique::{UniqueTracker, MAX_RETRY};
