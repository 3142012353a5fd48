//! Name-to-provider mapping.

use crate::error::FakerError;
use faker_core::{Provider, ProviderContext, Shape, Value};
use rand::rngs::StdRng;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Registered providers, keyed by tag name.
///
/// Registration is one-time: a name can never be re-bound or removed.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Box<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in provider.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, provider) in faker_providers::BUILTINS {
            registry
                .providers
                .insert((*name).to_string(), Box::new(*provider));
        }
        registry
    }

    /// Register a provider under `name`.
    ///
    /// Fails if the name is taken; the existing provider stays in place.
    pub fn register<P>(&mut self, name: impl Into<String>, provider: P) -> Result<(), FakerError>
    where
        P: Provider + 'static,
    {
        match self.providers.entry(name.into()) {
            Entry::Occupied(entry) => Err(FakerError::ProviderExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(provider = %entry.key(), "Registered provider");
                entry.insert(Box::new(provider));
                Ok(())
            }
        }
    }

    /// Look up a provider.
    pub fn get(&self, name: &str) -> Option<&dyn Provider> {
        self.providers.get(name).map(|p| p.as_ref())
    }

    /// Check if a provider is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Invoke the provider `name` for a field of `shape` and coerce the
    /// result to that shape.
    pub fn invoke(&self, name: &str, shape: &Shape, rng: &mut StdRng) -> Result<Value, FakerError> {
        let provider = self
            .get(name)
            .ok_or_else(|| FakerError::UnsupportedTag(name.to_string()))?;

        let mut ctx = ProviderContext::new(shape, rng);
        let value = provider
            .provide(&mut ctx)
            .map_err(|source| FakerError::Provider {
                provider: name.to_string(),
                source,
            })?;

        value
            .coerce_to(shape)
            .map_err(|source| FakerError::IncompatibleProviderValue {
                provider: name.to_string(),
                source,
            })
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
