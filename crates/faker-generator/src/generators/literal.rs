//! `use=<literal>` conversion.

use super::numeric::wrap_integer;
use crate::directive::{parse_bool, TagError};
use crate::error::FakerError;
use faker_core::{Shape, Value};

/// Convert a `use=` literal to a scalar of `shape`.
///
/// Integers accept any `i64`/`u64` spelling and fall back to a float
/// parse truncated toward zero, then wrap to the target width. Floats
/// parse at their own width. `tag` names the annotation in errors.
pub fn parse_literal(shape: &Shape, literal: &str, tag: &str) -> Result<Value, FakerError> {
    let not_a_number = || TagError::NotANumber(tag.to_string());

    match shape {
        Shape::String => Ok(Value::String(literal.to_string())),
        Shape::Bool => parse_bool(literal)
            .map(Value::Bool)
            .ok_or_else(|| TagError::NotABool(tag.to_string()).into()),
        Shape::Float32 => literal
            .parse::<f32>()
            .map(Value::Float32)
            .map_err(|_| not_a_number().into()),
        Shape::Float64 => literal
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|_| not_a_number().into()),
        Shape::Uint64 => match literal.parse::<u64>() {
            Ok(n) => Ok(Value::Uint64(n)),
            Err(_) => integer_literal(shape, literal).ok_or_else(|| not_a_number().into()),
        },
        s if s.is_integer() => integer_literal(s, literal).ok_or_else(|| not_a_number().into()),
        other => Err(FakerError::TagNotSupportedForKind {
            tag: tag.to_string(),
            kind: other.to_string(),
        }),
    }
}

fn integer_literal(shape: &Shape, literal: &str) -> Option<Value> {
    let n = match literal.parse::<i64>() {
        Ok(n) => n,
        Err(_) => match literal.parse::<u64>() {
            Ok(n) => n as i64,
            Err(_) => {
                let f = literal.parse::<f64>().ok().filter(|f| f.is_finite())?;
                f as i64
            }
        },
    };
    wrap_integer(shape, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scalar_width() {
        let cases = [
            (Shape::Int8, "-12", Value::Int8(-12)),
            (Shape::Int16, "1234", Value::Int16(1234)),
            (Shape::Int32, "-70000", Value::Int32(-70000)),
            (Shape::Int64, "9007199254740993", Value::Int64(9007199254740993)),
            (Shape::Uint8, "200", Value::Uint8(200)),
            (Shape::Uint16, "65535", Value::Uint16(65535)),
            (Shape::Uint32, "4000000000", Value::Uint32(4000000000)),
            (Shape::Uint64, "18446744073709551615", Value::Uint64(u64::MAX)),
            (Shape::Float32, "1.5", Value::Float32(1.5)),
            (Shape::Float64, "-2.25", Value::Float64(-2.25)),
            (Shape::Bool, "true", Value::Bool(true)),
            (Shape::String, "Power", Value::String("Power".to_string())),
        ];

        for (shape, literal, expected) in cases {
            assert_eq!(
                parse_literal(&shape, literal, "use").unwrap(),
                expected,
                "literal {literal} for {shape}"
            );
        }
    }

    #[test]
    fn test_integer_from_float_spelling() {
        assert_eq!(
            parse_literal(&Shape::Int32, "43.9", "use=43.9").unwrap(),
            Value::Int32(43)
        );
    }

    #[test]
    fn test_integer_wraps_to_width() {
        assert_eq!(
            parse_literal(&Shape::Uint8, "256", "use=256").unwrap(),
            Value::Uint8(0)
        );
    }

    #[test]
    fn test_errors_name_the_tag() {
        let err = parse_literal(&Shape::Int64, "abc", "use=abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tag \"use=abc\" is not written properly: not a number"
        );

        let err = parse_literal(&Shape::Bool, "yes", "use=yes").unwrap_err();
        assert!(matches!(err, FakerError::Tag(TagError::NotABool(_))));
    }

    #[test]
    fn test_non_scalar_shape() {
        let err = parse_literal(&Shape::Timestamp, "now", "use=now").unwrap_err();
        assert!(matches!(err, FakerError::TagNotSupportedForKind { .. }));
    }
}
