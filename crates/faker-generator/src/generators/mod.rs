//! Leaf value synthesizers.
//!
//! These draw scalars, strings, timestamps and collection lengths from the
//! session RNG. The walker decides which one to call; none of them recurse.

pub mod collection;
pub mod literal;
pub mod numeric;
pub mod string;
pub mod timestamp;

use crate::config::FakerConfig;
use crate::error::FakerError;
use faker_core::{Shape, Value};
use rand::Rng;

/// Draw an untagged scalar for `shape`.
///
/// Returns `None` for shapes that are not scalars.
pub fn random_scalar<R: Rng>(
    rng: &mut R,
    shape: &Shape,
    config: &FakerConfig,
) -> Result<Option<Value>, FakerError> {
    Ok(match shape {
        Shape::Bool => Some(Value::Bool(rng.random_bool(0.5))),
        Shape::String => Some(Value::String(string::random_string(
            rng,
            config.random_string_len,
        ))),
        Shape::Float32 | Shape::Float64 => numeric::random_float(rng, shape),
        Shape::Timestamp => Some(timestamp::around_now(rng)),
        s if s.is_integer() => {
            let boundary = config.number_boundary;
            let n = numeric::draw_integer(rng, boundary.start, boundary.end)?;
            numeric::wrap_integer(s, n)
        }
        _ => None,
    })
}
