//! Value representations for the fixture-faker framework.
//!
//! `Value` is the runtime counterpart of [`Shape`]: every synthesised
//! fixture is a `Value` tree whose variants mirror the shape it was built
//! from. Values are hashable (floats compare bitwise) so they can be
//! tracked in uniqueness sets.

use crate::shape::Shape;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Error type for value conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Value kind does not match the requested shape
    #[error("expected {expected} value, found {found}")]
    Mismatch { expected: String, found: String },

    /// Integer does not fit the requested width
    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: String, target: String },

    /// Record value carries a field the shape does not declare
    #[error("record {record} has no field \"{field}\"")]
    UnknownField { record: String, field: String },

    /// Record value lacks a field the target type requires
    #[error("record value is missing field \"{0}\"")]
    MissingField(String),

    /// Fixed-length array with the wrong number of elements
    #[error("array of length {expected} cannot hold {found} elements")]
    LengthMismatch { expected: usize, found: usize },
}

impl ValueError {
    /// Create a mismatch error.
    pub fn mismatch(expected: impl ToString, found: impl ToString) -> Self {
        Self::Mismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// Runtime value of a synthesised fixture.
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 8-bit signed integer
    Int8(i8),

    /// 16-bit signed integer
    Int16(i16),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 8-bit unsigned integer
    Uint8(u8),

    /// 16-bit unsigned integer
    Uint16(u16),

    /// 32-bit unsigned integer
    Uint32(u32),

    /// 64-bit unsigned integer
    Uint64(u64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// Fixed-length array
    Array(Vec<Value>),

    /// Slice; `None` is the nil slice
    Slice(Option<Vec<Value>>),

    /// Map entries in insertion order; `None` is the nil map
    Map(Option<Vec<(Value, Value)>>),

    /// Record fields keyed by name
    Record(BTreeMap<String, Value>),

    /// Pointer; `None` is the nil pointer
    Pointer(Option<Box<Value>>),

    /// Date/time in UTC
    Timestamp(DateTime<Utc>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Uint8(a), Self::Uint8(b)) => a == b,
            (Self::Uint16(a), Self::Uint16(b)) => a == b,
            (Self::Uint32(a), Self::Uint32(b)) => a == b,
            (Self::Uint64(a), Self::Uint64(b)) => a == b,
            // Bitwise so that Eq and Hash agree (NaN == NaN, 0.0 != -0.0)
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Slice(a), Self::Slice(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Pointer(a), Self::Pointer(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(v) => v.hash(state),
            Self::Int8(v) => v.hash(state),
            Self::Int16(v) => v.hash(state),
            Self::Int32(v) => v.hash(state),
            Self::Int64(v) => v.hash(state),
            Self::Uint8(v) => v.hash(state),
            Self::Uint16(v) => v.hash(state),
            Self::Uint32(v) => v.hash(state),
            Self::Uint64(v) => v.hash(state),
            Self::Float32(v) => v.to_bits().hash(state),
            Self::Float64(v) => v.to_bits().hash(state),
            Self::String(v) => v.hash(state),
            Self::Array(v) => v.hash(state),
            Self::Slice(v) => v.hash(state),
            Self::Map(v) => v.hash(state),
            Self::Record(v) => v.hash(state),
            Self::Pointer(v) => v.hash(state),
            Self::Timestamp(v) => v.hash(state),
        }
    }
}

impl Value {
    /// Short name of this value's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int8(_) => "int8",
            Self::Int16(_) => "int16",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Uint8(_) => "uint8",
            Self::Uint16(_) => "uint16",
            Self::Uint32(_) => "uint32",
            Self::Uint64(_) => "uint64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Slice(_) => "slice",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Pointer(_) => "pointer",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Check if this value is a nil slice, map or pointer.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Slice(None) | Self::Map(None) | Self::Pointer(None))
    }

    /// Check if this value equals the zero value of its kind.
    ///
    /// Maps count as zero when nil or empty.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Bool(v) => !v,
            Self::Int8(v) => *v == 0,
            Self::Int16(v) => *v == 0,
            Self::Int32(v) => *v == 0,
            Self::Int64(v) => *v == 0,
            Self::Uint8(v) => *v == 0,
            Self::Uint16(v) => *v == 0,
            Self::Uint32(v) => *v == 0,
            Self::Uint64(v) => *v == 0,
            Self::Float32(v) => *v == 0.0,
            Self::Float64(v) => *v == 0.0,
            Self::String(v) => v.is_empty(),
            Self::Array(items) => items.iter().all(Value::is_zero),
            Self::Slice(items) => items.is_none(),
            Self::Map(entries) => entries.as_ref().map_or(true, |e| e.is_empty()),
            Self::Record(fields) => fields.values().all(Value::is_zero),
            Self::Pointer(inner) => inner.is_none(),
            Self::Timestamp(ts) => *ts == DateTime::<Utc>::default(),
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64 (signed integers of any width).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(v) => Some(i64::from(*v)),
            Self::Int16(v) => Some(i64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as a u64 (unsigned integers of any width).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint8(v) => Some(u64::from(*v)),
            Self::Uint16(v) => Some(u64::from(*v)),
            Self::Uint32(v) => Some(u64::from(*v)),
            Self::Uint64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as an i128 (any integer).
    pub fn as_i128(&self) -> Option<i128> {
        self.as_i64()
            .map(i128::from)
            .or_else(|| self.as_u64().map(i128::from))
    }

    /// Try to get this value as an f64 (floats of either width).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(v) => Some(f64::from(*v)),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the elements of an array or non-nil slice.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) | Self::Slice(Some(items)) => Some(items),
            _ => None,
        }
    }

    /// Try to get the entries of a non-nil map.
    pub fn as_entries(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(Some(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key in a map value.
    pub fn map_get(&self, key: &Value) -> Option<&Value> {
        self.as_entries()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Try to get the fields of a record.
    pub fn as_record(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get a record field by name.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.as_record()?.get(name)
    }

    /// Try to get the target of a non-nil pointer.
    pub fn as_pointee(&self) -> Option<&Value> {
        match self {
            Self::Pointer(Some(inner)) => Some(inner),
            _ => None,
        }
    }

    /// Consume a non-nil pointer, returning its target.
    pub fn into_pointee(self) -> Option<Value> {
        match self {
            Self::Pointer(Some(inner)) => Some(*inner),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Convert this value to the given shape.
    ///
    /// Used for provider results, whose kind is only known at runtime.
    /// Integers convert between widths when the value fits, integers and
    /// floats widen into floats, a non-pointer value is boxed into a
    /// pointer shape, and collections convert element-wise. Anything else
    /// is a [`ValueError`].
    pub fn coerce_to(self, shape: &Shape) -> Result<Value, ValueError> {
        match (shape, self) {
            (Shape::Pointer { .. }, Value::Pointer(None)) => Ok(Value::Pointer(None)),
            (Shape::Pointer { pointee }, Value::Pointer(Some(inner))) => {
                Ok(Value::Pointer(Some(Box::new(inner.coerce_to(pointee)?))))
            }
            (Shape::Pointer { pointee }, other) => {
                Ok(Value::Pointer(Some(Box::new(other.coerce_to(pointee)?))))
            }

            (Shape::Bool, v @ Value::Bool(_)) => Ok(v),
            (Shape::String, v @ Value::String(_)) => Ok(v),
            (Shape::Timestamp, v @ Value::Timestamp(_)) => Ok(v),

            (s, v) if s.is_integer() && v.as_i128().is_some() => integer_to_shape(s, &v),

            (Shape::Float32, Value::Float32(f)) => Ok(Value::Float32(f)),
            (Shape::Float32, Value::Float64(f)) => Ok(Value::Float32(f as f32)),
            (Shape::Float32, v) if v.as_i128().is_some() => {
                Ok(Value::Float32(v.as_i128().unwrap_or_default() as f32))
            }
            (Shape::Float64, v) if v.as_f64().is_some() => {
                Ok(Value::Float64(v.as_f64().unwrap_or_default()))
            }
            (Shape::Float64, v) if v.as_i128().is_some() => {
                Ok(Value::Float64(v.as_i128().unwrap_or_default() as f64))
            }

            (Shape::Slice { .. }, Value::Slice(None)) => Ok(Value::Slice(None)),
            (Shape::Slice { element }, Value::Slice(Some(items)) | Value::Array(items)) => {
                Ok(Value::Slice(Some(coerce_items(items, element)?)))
            }
            (Shape::Array { element, len }, Value::Array(items) | Value::Slice(Some(items))) => {
                if items.len() != *len {
                    return Err(ValueError::LengthMismatch {
                        expected: *len,
                        found: items.len(),
                    });
                }
                Ok(Value::Array(coerce_items(items, element)?))
            }

            (Shape::Map { .. }, Value::Map(None)) => Ok(Value::Map(None)),
            (Shape::Map { key, value }, Value::Map(Some(entries))) => {
                let mut coerced = Vec::with_capacity(entries.len());
                for (k, v) in entries {
                    insert_entry(&mut coerced, k.coerce_to(key)?, v.coerce_to(value)?);
                }
                Ok(Value::Map(Some(coerced)))
            }

            (Shape::Record(record), Value::Record(mut fields)) => {
                if let Some(unknown) = fields.keys().find(|k| record.get_field(k).is_none()) {
                    return Err(ValueError::UnknownField {
                        record: record.name.clone(),
                        field: unknown.clone(),
                    });
                }
                let mut coerced = BTreeMap::new();
                for field in &record.fields {
                    let value = match fields.remove(&field.name) {
                        Some(v) => v.coerce_to(&field.shape)?,
                        None => field.shape.zero_value(),
                    };
                    coerced.insert(field.name.clone(), value);
                }
                Ok(Value::Record(coerced))
            }

            (s, v) => Err(ValueError::mismatch(s, v.kind_name())),
        }
    }
}

fn coerce_items(items: Vec<Value>, element: &Shape) -> Result<Vec<Value>, ValueError> {
    items.into_iter().map(|item| item.coerce_to(element)).collect()
}

fn integer_to_shape(shape: &Shape, value: &Value) -> Result<Value, ValueError> {
    let n = value.as_i128().unwrap_or_default();
    let out_of_range = || ValueError::OutOfRange {
        value: n.to_string(),
        target: shape.to_string(),
    };
    let converted = match shape {
        Shape::Int8 => Value::Int8(i8::try_from(n).map_err(|_| out_of_range())?),
        Shape::Int16 => Value::Int16(i16::try_from(n).map_err(|_| out_of_range())?),
        Shape::Int32 => Value::Int32(i32::try_from(n).map_err(|_| out_of_range())?),
        Shape::Int64 => Value::Int64(i64::try_from(n).map_err(|_| out_of_range())?),
        Shape::Uint8 => Value::Uint8(u8::try_from(n).map_err(|_| out_of_range())?),
        Shape::Uint16 => Value::Uint16(u16::try_from(n).map_err(|_| out_of_range())?),
        Shape::Uint32 => Value::Uint32(u32::try_from(n).map_err(|_| out_of_range())?),
        Shape::Uint64 => Value::Uint64(u64::try_from(n).map_err(|_| out_of_range())?),
        other => return Err(ValueError::mismatch(other, value.kind_name())),
    };
    Ok(converted)
}

/// Insert a map entry, replacing the value of an equal key.
pub fn insert_entry(entries: &mut Vec<(Value, Value)>, key: Value, value: Value) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{FieldShape, RecordShape};
    use std::collections::HashSet;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int16(-7).as_i64(), Some(-7));
        assert_eq!(Value::Uint32(9).as_u64(), Some(9));
        assert_eq!(Value::Float32(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::String("x".to_string()).as_str(), Some("x"));

        // Cross-kind lookups stay strict
        assert_eq!(Value::Uint8(1).as_i64(), None);
        assert_eq!(Value::Int8(1).as_bool(), None);
    }

    #[test]
    fn test_float_equality_is_bitwise() {
        assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
        assert_ne!(Value::Float32(0.0), Value::Float32(-0.0));

        let mut set = HashSet::new();
        assert!(set.insert(Value::Float64(1.25)));
        assert!(!set.insert(Value::Float64(1.25)));
        assert!(set.insert(Value::Float32(1.25)));
    }

    #[test]
    fn test_is_zero() {
        assert!(Value::Int64(0).is_zero());
        assert!(!Value::Int64(42).is_zero());
        assert!(Value::String(String::new()).is_zero());
        assert!(Value::Map(None).is_zero());
        assert!(Value::Map(Some(vec![])).is_zero());
        assert!(!Value::Map(Some(vec![(Value::Bool(true), Value::Bool(true))])).is_zero());
        assert!(Value::Pointer(None).is_zero());
        assert!(Value::Timestamp(DateTime::<Utc>::default()).is_zero());
    }

    #[test]
    fn test_coerce_integer_widths() {
        assert_eq!(
            Value::Int64(43).coerce_to(&Shape::Int8).unwrap(),
            Value::Int8(43)
        );
        assert_eq!(
            Value::Uint8(200).coerce_to(&Shape::Int64).unwrap(),
            Value::Int64(200)
        );
        assert!(matches!(
            Value::Int64(300).coerce_to(&Shape::Uint8),
            Err(ValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            Value::Int32(-1).coerce_to(&Shape::Uint32),
            Err(ValueError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_coerce_floats_and_mismatch() {
        assert_eq!(
            Value::Float64(2.5).coerce_to(&Shape::Float32).unwrap(),
            Value::Float32(2.5)
        );
        assert_eq!(
            Value::Int32(3).coerce_to(&Shape::Float64).unwrap(),
            Value::Float64(3.0)
        );
        assert!(matches!(
            Value::String("x".to_string()).coerce_to(&Shape::Int32),
            Err(ValueError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_coerce_pointer_and_collections() {
        let shape = Shape::pointer(Shape::Int16);
        assert_eq!(
            Value::Int64(5).coerce_to(&shape).unwrap(),
            Value::Pointer(Some(Box::new(Value::Int16(5))))
        );

        let shape = Shape::slice(Shape::Uint16);
        let value = Value::Slice(Some(vec![Value::Int64(1), Value::Int64(2)]));
        assert_eq!(
            value.coerce_to(&shape).unwrap(),
            Value::Slice(Some(vec![Value::Uint16(1), Value::Uint16(2)]))
        );

        let shape = Shape::array(Shape::Bool, 2);
        assert!(matches!(
            Value::Array(vec![Value::Bool(true)]).coerce_to(&shape),
            Err(ValueError::LengthMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_coerce_record() {
        let shape = Shape::Record(
            RecordShape::new("Gadget")
                .field(FieldShape::new("name", Shape::String))
                .field(FieldShape::new("weight", Shape::Int32)),
        );

        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), Value::String("Power".to_string()));
        let coerced = Value::Record(fields.clone()).coerce_to(&shape).unwrap();
        assert_eq!(coerced.get_field("weight"), Some(&Value::Int32(0)));

        fields.insert("colour".to_string(), Value::Bool(true));
        assert!(matches!(
            Value::Record(fields).coerce_to(&shape),
            Err(ValueError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_insert_entry_overwrites() {
        let mut entries = Vec::new();
        insert_entry(&mut entries, Value::Int8(1), Value::Bool(false));
        insert_entry(&mut entries, Value::Int8(1), Value::Bool(true));
        assert_eq!(entries.len(), 1);

        let map = Value::Map(Some(entries));
        assert_eq!(map.map_get(&Value::Int8(1)), Some(&Value::Bool(true)));
    }
}
