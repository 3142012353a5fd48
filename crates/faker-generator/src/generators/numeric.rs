//! Numeric value generators.

use crate::error::FakerError;
use faker_core::{Shape, Value};
use rand::Rng;

/// Draw an integer in `[start, end)`.
///
/// `start == end` yields `start`; `start > end` is an error.
pub fn draw_integer<R: Rng>(rng: &mut R, start: i64, end: i64) -> Result<i64, FakerError> {
    if start > end {
        return Err(FakerError::InvalidBoundary { start, end });
    }
    if start == end {
        return Ok(start);
    }
    Ok(rng.random_range(start..end))
}

/// Draw a float in `[start, end)` at the width of `shape`.
pub fn draw_float<R: Rng>(
    rng: &mut R,
    shape: &Shape,
    start: i64,
    end: i64,
) -> Result<Option<Value>, FakerError> {
    if start > end {
        return Err(FakerError::InvalidBoundary { start, end });
    }
    // Distinct integers can round to the same float
    let (lo, hi) = (start as f64, end as f64);
    let f = if lo >= hi {
        lo
    } else {
        rng.random_range(lo..hi)
    };
    Ok(match shape {
        Shape::Float32 => Some(Value::Float32(f as f32)),
        Shape::Float64 => Some(Value::Float64(f)),
        _ => None,
    })
}

/// Uniform float in `[0, 1)` at the width of `shape`.
pub fn random_float<R: Rng>(rng: &mut R, shape: &Shape) -> Option<Value> {
    match shape {
        Shape::Float32 => Some(Value::Float32(rng.random::<f32>())),
        Shape::Float64 => Some(Value::Float64(rng.random::<f64>())),
        _ => None,
    }
}

/// Truncate `n` to the integer width of `shape`, wrapping on overflow.
pub fn wrap_integer(shape: &Shape, n: i64) -> Option<Value> {
    Some(match shape {
        Shape::Int8 => Value::Int8(n as i8),
        Shape::Int16 => Value::Int16(n as i16),
        Shape::Int32 => Value::Int32(n as i32),
        Shape::Int64 => Value::Int64(n),
        Shape::Uint8 => Value::Uint8(n as u8),
        Shape::Uint16 => Value::Uint16(n as u16),
        Shape::Uint32 => Value::Uint32(n as u32),
        Shape::Uint64 => Value::Uint64(n as u64),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_integer_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = draw_integer(&mut rng, -5, 5).unwrap();
            assert!((-5..5).contains(&v));
        }
    }

    #[test]
    fn test_draw_integer_narrow_and_empty() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(draw_integer(&mut rng, 10, 11).unwrap(), 10);
        }
        assert_eq!(draw_integer(&mut rng, 3, 3).unwrap(), 3);
        assert!(matches!(
            draw_integer(&mut rng, 4, 3),
            Err(FakerError::InvalidBoundary { start: 4, end: 3 })
        ));
    }

    #[test]
    fn test_draw_float() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let Some(Value::Float32(f)) = draw_float(&mut rng, &Shape::Float32, 1, 2).unwrap()
            else {
                panic!("Expected Float32 value");
            };
            assert!((1.0..=2.0).contains(&f));
        }
        assert_eq!(
            draw_float(&mut rng, &Shape::Float64, 7, 7).unwrap(),
            Some(Value::Float64(7.0))
        );
        assert!(draw_float(&mut rng, &Shape::Float64, 8, 7).is_err());
    }

    #[test]
    fn test_draw_float_collapsed_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = 1i64 << 60;

        assert_eq!(
            draw_float(&mut rng, &Shape::Float64, start, start + 1).unwrap(),
            Some(Value::Float64(start as f64))
        );
        assert_eq!(
            draw_float(&mut rng, &Shape::Float32, start, start + 1).unwrap(),
            Some(Value::Float32(start as f32))
        );
    }

    #[test]
    fn test_wrap_integer() {
        assert_eq!(wrap_integer(&Shape::Int8, 300), Some(Value::Int8(44)));
        assert_eq!(wrap_integer(&Shape::Uint8, -1), Some(Value::Uint8(255)));
        assert_eq!(wrap_integer(&Shape::Uint64, 5), Some(Value::Uint64(5)));
        assert_eq!(wrap_integer(&Shape::String, 5), None);
    }
}
