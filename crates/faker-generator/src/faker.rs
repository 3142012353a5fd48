//! The faker session.

use crate::config::{non_negative, FakerConfig, NumberBoundary};
use crate::error::FakerError;
use crate::registry::ProviderRegistry;
use crate::unique::UniqueTracker;
use crate::walker::Walker;
use faker_core::{Fakeable, Provider, Shape, Value};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// A synthesis session.
///
/// Owns the configuration, the provider registry, the uniqueness history
/// and the RNG. Two sessions never share state; a seeded session is fully
/// reproducible.
#[derive(Debug)]
pub struct Faker {
    config: FakerConfig,
    registry: ProviderRegistry,
    unique: UniqueTracker,
    rng: StdRng,
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

impl Faker {
    /// Create a session with default configuration, built-in providers and
    /// an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_valid_config(FakerConfig::default())
    }

    /// Create a session from a configuration, seeding the RNG from
    /// `config.seed` when set.
    pub fn from_config(config: FakerConfig) -> Result<Self, FakerError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// Create a seeded session with default configuration.
    pub fn seeded(seed: u64) -> Self {
        Self::with_valid_config(FakerConfig {
            seed: Some(seed),
            ..FakerConfig::default()
        })
    }

    fn with_valid_config(config: FakerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            registry: ProviderRegistry::with_builtins(),
            unique: UniqueTracker::new(),
            rng,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &FakerConfig {
        &self.config
    }

    /// Registered providers.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Fill the value behind `target`.
    ///
    /// `shape` must be a pointer shape and `target` a non-nil pointer. The
    /// pointee's current value is visible to `-` and `keep` fields. The
    /// target is only written once the whole value is built.
    pub fn fake(&mut self, shape: &Shape, target: &mut Value) -> Result<(), FakerError> {
        let (Shape::Pointer { pointee }, Value::Pointer(slot)) = (shape, &mut *target) else {
            return Err(FakerError::NotAPointer);
        };
        let Some(current) = slot.as_deref() else {
            return Err(FakerError::NilPointer(pointee.to_string()));
        };

        debug!(shape = %pointee, "Faking value");
        let value = Walker::new(
            &self.config,
            &mut self.rng,
            &self.registry,
            &mut self.unique,
        )
        .walk(pointee, Some(current))?;

        *slot = Some(Box::new(value));
        Ok(())
    }

    /// Fill a typed value in place.
    pub fn fake_into<T: Fakeable>(&mut self, target: &mut T) -> Result<(), FakerError> {
        let shape = Shape::pointer(T::shape());
        let mut value = Value::Pointer(Some(Box::new(target.to_value())));
        self.fake(&shape, &mut value)?;

        let filled = value
            .into_pointee()
            .ok_or_else(|| FakerError::NilPointer(T::shape().to_string()))?;
        *target = T::from_value(filled)?;
        Ok(())
    }

    /// Build a fresh typed value.
    pub fn fake_value<T: Fakeable>(&mut self) -> Result<T, FakerError> {
        let shape = T::shape();
        let mut target = T::from_value(shape.zero_value())?;
        self.fake_into(&mut target)?;
        Ok(target)
    }

    /// Invoke a single provider for a value of `shape`.
    ///
    /// With unique mode on, draws repeat until the value is new for the
    /// provider's name.
    pub fn fake_single(&mut self, provider: &str, shape: &Shape) -> Result<Value, FakerError> {
        if !self.registry.contains(provider) {
            return Err(FakerError::UnsupportedTag(provider.to_string()));
        }
        if !self.config.unique_mode {
            return self.registry.invoke(provider, shape, &mut self.rng);
        }

        let registry = &self.registry;
        let rng = &mut self.rng;
        self.unique
            .generate_unique(provider, provider, || registry.invoke(provider, shape, rng))
    }

    /// Shuffled run of consecutive integers.
    ///
    /// `[n]` gives the `n` values of `[n, 2n)`. `[min, max]` gives every
    /// value of `[min, max]`. Any other argument count is an error.
    pub fn random_int(&mut self, params: &[i64]) -> Result<Vec<i64>, FakerError> {
        let mut values: Vec<i64> = match *params {
            [n] => {
                non_negative(n)?;
                (n..n.saturating_mul(2)).collect()
            }
            [min, max] => {
                if min > max {
                    return Err(FakerError::InvalidBoundary {
                        start: min,
                        end: max,
                    });
                }
                (min..=max).collect()
            }
            _ => return Err(FakerError::ArgumentCount(params.len())),
        };
        values.shuffle(&mut self.rng);
        Ok(values)
    }

    /// Register a provider under `name`.
    ///
    /// Names are bound once; a second registration fails and the original
    /// provider stays in place.
    pub fn register_provider<P>(&mut self, name: impl Into<String>, provider: P) -> Result<(), FakerError>
    where
        P: Provider + 'static,
    {
        self.registry.register(name, provider)
    }

    /// Re-seed the RNG.
    pub fn set_seed(&mut self, seed: u64) {
        debug!(seed, "Seeding RNG");
        self.config.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Leave empty slices and maps nil.
    pub fn set_nil_on_empty(&mut self, nil_on_empty: bool) {
        debug!(nil_on_empty, "Updated config");
        self.config.nil_on_empty = nil_on_empty;
    }

    /// Length of untagged random strings.
    pub fn set_random_string_length(&mut self, size: i64) -> Result<(), FakerError> {
        self.config.random_string_len = non_negative(size)?;
        debug!(random_string_len = size, "Updated config");
        Ok(())
    }

    /// Give every slice and map exactly `size` elements.
    pub fn set_fixed_collection_size(&mut self, size: i64) -> Result<(), FakerError> {
        self.config.collection_size = non_negative(size)?;
        self.config.fixed_collection_size = true;
        debug!(collection_size = size, "Using fixed collection size");
        Ok(())
    }

    /// Draw slice and map lengths from `[0, size)`.
    pub fn set_random_collection_size(&mut self, size: i64) -> Result<(), FakerError> {
        self.config.collection_size = non_negative(size)?;
        self.config.fixed_collection_size = false;
        debug!(collection_size = size, "Using random collection size");
        Ok(())
    }

    /// Range `[start, end)` of untagged random integers.
    pub fn set_number_boundary(&mut self, start: i64, end: i64) -> Result<(), FakerError> {
        self.config.number_boundary = NumberBoundary::new(start, end)?;
        debug!(start, end, "Updated number boundary");
        Ok(())
    }

    /// Toggle unique draws for [`fake_single`](Self::fake_single).
    pub fn set_unique_mode(&mut self, unique: bool) {
        debug!(unique, "Updated config");
        self.config.unique_mode = unique;
    }

    /// Forget every value recorded for uniqueness.
    pub fn reset_unique(&mut self) {
        debug!("Resetting unique values");
        self.unique.reset();
    }

    #[doc(hidden)]
    pub fn force_empty_collections(&mut self, force: bool) {
        self.config.force_empty_collections = force;
    }
}
