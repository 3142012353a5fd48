//! Bridge between plain Rust types and the shape/value model.
//!
//! Implementing [`Fakeable`] lets a Rust type describe its own [`Shape`]
//! and convert losslessly to and from [`Value`], which is what the typed
//! generator entry point needs. Records are usually implemented with the
//! [`fakeable_record!`](crate::fakeable_record) macro, which also carries
//! the per-field annotations.

use crate::shape::Shape;
use crate::value::{insert_entry, Value, ValueError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::hash::Hash;

/// A Rust type with a known shape and a lossless `Value` conversion.
pub trait Fakeable: Sized {
    /// Shape describing this type.
    fn shape() -> Shape;

    /// Convert to a value tree.
    fn to_value(&self) -> Value;

    /// Rebuild from a value tree of this type's shape.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

macro_rules! scalar_fakeable {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Fakeable for $ty {
            fn shape() -> Shape {
                Shape::$variant
            }

            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(ValueError::mismatch(Shape::$variant, other.kind_name())),
                }
            }
        }
    )*};
}

scalar_fakeable!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    DateTime<Utc> => Timestamp,
);

impl<T: Fakeable> Fakeable for Vec<T> {
    fn shape() -> Shape {
        Shape::slice(T::shape())
    }

    fn to_value(&self) -> Value {
        Value::Slice(Some(self.iter().map(Fakeable::to_value).collect()))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Slice(None) => Ok(Vec::new()),
            Value::Slice(Some(items)) | Value::Array(items) => {
                items.into_iter().map(T::from_value).collect()
            }
            other => Err(ValueError::mismatch(Self::shape(), other.kind_name())),
        }
    }
}

impl<T: Fakeable, const N: usize> Fakeable for [T; N] {
    fn shape() -> Shape {
        Shape::array(T::shape(), N)
    }

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Fakeable::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(ValueError::mismatch(Self::shape(), other.kind_name())),
        };
        let found = items.len();
        let items = items
            .into_iter()
            .map(T::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        items.try_into().map_err(|_| ValueError::LengthMismatch {
            expected: N,
            found,
        })
    }
}

/// `Option<T>` is the pointer shape: `None` is the nil pointer.
impl<T: Fakeable> Fakeable for Option<T> {
    fn shape() -> Shape {
        Shape::pointer(T::shape())
    }

    fn to_value(&self) -> Value {
        Value::Pointer(self.as_ref().map(|v| Box::new(v.to_value())))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Pointer(None) => Ok(None),
            Value::Pointer(Some(inner)) => T::from_value(*inner).map(Some),
            other => Err(ValueError::mismatch(Self::shape(), other.kind_name())),
        }
    }
}

impl<K, V> Fakeable for HashMap<K, V>
where
    K: Fakeable + Eq + Hash,
    V: Fakeable,
{
    fn shape() -> Shape {
        Shape::map(K::shape(), V::shape())
    }

    fn to_value(&self) -> Value {
        let mut entries = Vec::with_capacity(self.len());
        for (k, v) in self {
            insert_entry(&mut entries, k.to_value(), v.to_value());
        }
        Value::Map(Some(entries))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Map(None) => Ok(HashMap::new()),
            Value::Map(Some(entries)) => entries
                .into_iter()
                .map(|(k, v)| -> Result<(K, V), ValueError> {
                    Ok((K::from_value(k)?, V::from_value(v)?))
                })
                .collect(),
            other => Err(ValueError::mismatch(Self::shape(), other.kind_name())),
        }
    }
}

/// Implement [`Fakeable`] for a plain struct, declaring each field's
/// type and optional annotation text.
///
/// Every field of the struct must be listed.
///
/// ```rust
/// use faker_core::{fakeable_record, Fakeable, Shape};
///
/// struct Account {
///     id: i64,
///     handle: String,
///     tags: Vec<String>,
/// }
///
/// fakeable_record!(Account {
///     id: i64 => "unique,boundary_start=1,boundary_end=1000",
///     handle: String => "len=12",
///     tags: Vec<String>,
/// });
///
/// let Shape::Record(record) = Account::shape() else { unreachable!() };
/// assert_eq!(record.get_field("handle").unwrap().tag, "len=12");
/// ```
#[macro_export]
macro_rules! fakeable_record {
    ($ty:ident { $($field:ident : $fty:ty $(=> $tag:literal)?),* $(,)? }) => {
        impl $crate::Fakeable for $ty {
            fn shape() -> $crate::Shape {
                $crate::Shape::Record(
                    $crate::RecordShape::new(stringify!($ty))
                        $(.field(
                            $crate::FieldShape::new(
                                stringify!($field),
                                <$fty as $crate::Fakeable>::shape(),
                            )
                            $(.with_tag($tag))?
                        ))*
                )
            }

            fn to_value(&self) -> $crate::Value {
                let mut fields = ::std::collections::BTreeMap::new();
                $(
                    fields.insert(
                        stringify!($field).to_string(),
                        <$fty as $crate::Fakeable>::to_value(&self.$field),
                    );
                )*
                $crate::Value::Record(fields)
            }

            fn from_value(value: $crate::Value) -> ::std::result::Result<Self, $crate::ValueError> {
                #[allow(unused_mut)]
                let mut fields = match value {
                    $crate::Value::Record(fields) => fields,
                    other => {
                        return Err($crate::ValueError::mismatch(
                            stringify!($ty),
                            other.kind_name(),
                        ))
                    }
                };
                Ok(Self {
                    $(
                        $field: <$fty as $crate::Fakeable>::from_value(
                            fields.remove(stringify!($field)).ok_or_else(|| {
                                $crate::ValueError::MissingField(stringify!($field).to_string())
                            })?,
                        )?,
                    )*
                })
            }
        }
    };
}
