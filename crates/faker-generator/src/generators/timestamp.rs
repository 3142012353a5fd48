//! Timestamp value generators.

use chrono::{TimeDelta, Utc};
use faker_core::Value;
use rand::Rng;

/// Largest offset from now, in seconds (100 years).
const MAX_OFFSET_SECS: i64 = 100 * 365 * 24 * 60 * 60;

/// Random instant up to 100 years before or after now.
pub fn around_now<R: Rng>(rng: &mut R) -> Value {
    let now = Utc::now();
    let offset = TimeDelta::seconds(rng.random_range(-MAX_OFFSET_SECS..=MAX_OFFSET_SECS))
        + TimeDelta::nanoseconds(rng.random_range(0..1_000_000_000));
    Value::Timestamp(now.checked_add_signed(offset).unwrap_or(now))
}
