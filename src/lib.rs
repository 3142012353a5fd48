//! fixture-faker
//!
//! Fill arbitrary structured values with random test data, steered by
//! per-field annotations.
//!
//! # Features
//!
//! - Recursive synthesis over records, arrays, slices, maps and pointers
//! - Literal, length, range, pass-through and keep annotations
//! - Named providers (emails, names, UUIDs, ...), extensible at runtime
//! - Bounded-retry uniqueness per annotation
//! - Seeded sessions for reproducible fixtures
//! - YAML record catalogs and JSON export
//!
//! # Crates
//!
//! - `faker_core` - shapes, values and the provider contract
//! - `faker_providers` - built-in providers
//! - `faker_generator` - the synthesis engine and [`Faker`] session
//!
//! # Example
//!
//! ```rust
//! use fixture_faker::{fakeable_record, Faker};
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     id: i64,
//!     name: String,
//!     email: String,
//!     tags: Vec<String>,
//! }
//!
//! fakeable_record!(User {
//!     id: i64 => "-",
//!     name: String => "use=hello",
//!     email: String => "email",
//!     tags: Vec<String> => "len=4",
//! });
//!
//! let mut faker = Faker::seeded(42);
//! let mut user = User { id: 42, ..User::default() };
//! faker.fake_into(&mut user).unwrap();
//!
//! assert_eq!(user.id, 42);
//! assert_eq!(user.name, "hello");
//! assert!(user.email.contains('@'));
//! assert!(user.tags.iter().all(|t| t.len() == 4));
//! ```

pub mod fixtures;
pub mod logging;

// Re-export the workspace crates for convenience
pub use faker_core;
pub use faker_generator;
pub use faker_providers;

pub use faker_core::{
    fakeable_record, FieldShape, Fakeable, Provider, ProviderContext, ProviderError,
    ProviderResult, RecordShape, Shape, ShapeCatalog, Value,
};
pub use faker_generator::{Directive, Faker, FakerConfig, FakerError, NumberBoundary};
pub use fixtures::{value_to_json, FixtureBuilder};
pub use logging::init_logging;
