//! The provider contract.
//!
//! A provider is a named generation capability. The generator invokes it
//! with the declared shape of the field being filled and the session RNG,
//! and converts whatever it returns to that shape.

use crate::shape::Shape;
use crate::value::Value;
use rand::rngs::StdRng;

/// Error returned by a provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    /// Create a provider error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for a provider asked to fill a shape it cannot produce.
    pub fn unsupported_shape(shape: &Shape) -> Self {
        Self::new(format!("cannot produce a value for {shape}"))
    }
}

/// Result type returned by providers.
pub type ProviderResult = Result<Value, ProviderError>;

/// Context handed to a provider on each invocation.
pub struct ProviderContext<'a> {
    shape: &'a Shape,
    rng: &'a mut StdRng,
}

impl<'a> ProviderContext<'a> {
    /// Create a context for the given field shape.
    pub fn new(shape: &'a Shape, rng: &'a mut StdRng) -> Self {
        Self { shape, rng }
    }

    /// Declared shape of the field being filled.
    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    /// Session RNG; providers draw from it to stay reproducible under a seed.
    pub fn rng(&mut self) -> &mut StdRng {
        self.rng
    }
}

/// A named generation capability.
///
/// Plain functions and closures with the signature
/// `fn(&mut ProviderContext<'_>) -> ProviderResult` implement this trait.
pub trait Provider: Send + Sync {
    /// Produce a value for the field described by `ctx`.
    fn provide(&self, ctx: &mut ProviderContext<'_>) -> ProviderResult;
}

impl<F> Provider for F
where
    F: Fn(&mut ProviderContext<'_>) -> ProviderResult + Send + Sync,
{
    fn provide(&self, ctx: &mut ProviderContext<'_>) -> ProviderResult {
        self(ctx)
    }
}
