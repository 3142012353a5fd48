//! Error type for the generator.

use crate::directive::TagError;
use faker_core::{ProviderError, ValueError};

/// Errors surfaced by a [`Faker`](crate::Faker) session.
#[derive(Debug, thiserror::Error)]
pub enum FakerError {
    /// Target or shape is not a pointer
    #[error("Not a pointer value")]
    NotAPointer,

    /// Target pointer is nil, so there is nothing to fill
    #[error("Nil pointer target: use a pointer to an allocated {0} instead")]
    NilPointer(String),

    /// Shape the walker cannot synthesise
    #[error("Unsupported kind: {0}")]
    UnsupportedKind(String),

    /// Tag names neither a provider nor a known form
    #[error("Tag unsupported: {0}")]
    UnsupportedTag(String),

    /// Known tag form used on a shape it does not apply to
    #[error("Tag \"{tag}\" is not supported for {kind}")]
    TagNotSupportedForKind { tag: String, kind: String },

    /// Boundary with start after end
    #[error("Start value can not be bigger than end value. ({start} > {end})")]
    InvalidBoundary { start: i64, end: i64 },

    /// Negative string length or collection size
    #[error("Size:{0} is smaller than zero.")]
    NegativeSize(i64),

    /// `random_int` called with neither one nor two arguments
    #[error("Expected one or two arguments, got {0}")]
    ArgumentCount(usize),

    /// Provider name already registered
    #[error("Tag exists: {0}")]
    ProviderExists(String),

    /// Retry bound hit while looking for an unused value
    #[error("Failed to generate a unique value for field \"{0}\"")]
    UniqueExhausted(String),

    /// `keep` on a record, timestamp, array or slice field
    #[error("keep not allowed on {kind} field \"{field}\"")]
    KeepNotAllowed { field: String, kind: String },

    /// Provider returned an error
    #[error("Provider \"{provider}\" failed: {source}")]
    Provider {
        provider: String,
        source: ProviderError,
    },

    /// Provider returned a value that does not fit the field
    #[error("Provider \"{provider}\" returned an incompatible value: {source}")]
    IncompatibleProviderValue {
        provider: String,
        source: ValueError,
    },

    /// Malformed annotation text
    #[error(transparent)]
    Tag(#[from] TagError),

    /// Typed conversion failure
    #[error("Value conversion failed: {0}")]
    Value(#[from] ValueError),

    /// Error reading a config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
