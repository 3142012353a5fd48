//! Uniqueness bookkeeping.

use crate::error::FakerError;
use faker_core::Value;
use std::collections::{HashMap, HashSet};
use tracing::{trace, warn};

/// Maximum number of regenerations before giving up on a unique value.
pub const MAX_RETRY: usize = 10_000;

/// Values already produced, per domain.
///
/// Domains grow until [`reset`](Self::reset) is called.
#[derive(Debug, Default)]
pub struct UniqueTracker {
    domains: HashMap<String, HashSet<Value>>,
}

impl UniqueTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `domain`.
    ///
    /// Returns `true` if the value was new, `false` if it was seen before.
    pub fn check_and_record(&mut self, domain: &str, value: &Value) -> bool {
        match self.domains.get_mut(domain) {
            Some(seen) => seen.insert(value.clone()),
            None => {
                self.domains
                    .insert(domain.to_string(), HashSet::from([value.clone()]));
                true
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, domain: &str, value: &Value) -> bool {
        self.domains
            .get(domain)
            .is_some_and(|seen| seen.contains(value))
    }

    #[cfg(test)]
    pub(crate) fn domain_len(&self, domain: &str) -> usize {
        self.domains.get(domain).map_or(0, HashSet::len)
    }

    /// Forget every recorded value.
    pub fn reset(&mut self) {
        self.domains.clear();
    }

    /// Call `generate` until it yields a value unseen in `domain`.
    ///
    /// Fails after [`MAX_RETRY`] attempts, naming `label`.
    pub fn generate_unique<F>(
        &mut self,
        domain: &str,
        label: &str,
        mut generate: F,
    ) -> Result<Value, FakerError>
    where
        F: FnMut() -> Result<Value, FakerError>,
    {
        retry_unique(domain, label, || {
            let value = generate()?;
            Ok(self.check_and_record(domain, &value).then_some(value))
        })
    }
}

/// Run `attempt` until it yields a value, at most [`MAX_RETRY`] times.
///
/// `attempt` returns `None` for a duplicate. Exhaustion names `label`.
pub(crate) fn retry_unique<F>(domain: &str, label: &str, mut attempt: F) -> Result<Value, FakerError>
where
    F: FnMut() -> Result<Option<Value>, FakerError>,
{
    for n in 0..MAX_RETRY {
        if let Some(value) = attempt()? {
            return Ok(value);
        }
        trace!(domain, label, attempt = n, "Duplicate value, retrying");
    }
    warn!(domain, label, "Unique values exhausted after {MAX_RETRY} attempts");
    Err(FakerError::UniqueExhausted(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_and_record() {
        let mut tracker = UniqueTracker::new();
        assert!(tracker.check_and_record("id", &Value::Int64(1)));
        assert!(!tracker.check_and_record("id", &Value::Int64(1)));
        assert!(tracker.check_and_record("id", &Value::Int64(2)));

        // Domains are independent
        assert!(tracker.check_and_record("other", &Value::Int64(1)));
        assert_eq!(tracker.domain_len("id"), 2);
    }

    #[test]
    fn test_reset() {
        let mut tracker = UniqueTracker::new();
        tracker.check_and_record("id", &Value::Int64(1));
        tracker.reset();

        assert!(!tracker.contains("id", &Value::Int64(1)));
        assert_eq!(tracker.domain_len("id"), 0);
    }

    #[test]
    fn test_float_values_are_distinct_bitwise() {
        let mut tracker = UniqueTracker::new();
        assert!(tracker.check_and_record("f", &Value::Float64(0.0)));
        assert!(tracker.check_and_record("f", &Value::Float64(-0.0)));
    }

    #[test]
    fn test_generate_unique_exhausts() {
        let mut tracker = UniqueTracker::new();
        let mut next = 0i64;
        let mut generate = || {
            next = (next + 1) % 3;
            Ok::<_, FakerError>(Value::Int64(next))
        };

        for _ in 0..3 {
            tracker.generate_unique("mod3", "n", &mut generate).unwrap();
        }
        let err = tracker.generate_unique("mod3", "n", &mut generate).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to generate a unique value for field \"n\""
        );
    }

    #[test]
    fn test_generate_unique_propagates_errors() {
        let mut tracker = UniqueTracker::new();
        let result = tracker.generate_unique("d", "f", || Err(FakerError::NotAPointer));
        assert!(matches!(result, Err(FakerError::NotAPointer)));
    }
}
