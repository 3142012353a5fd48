//! Type shapes for the fixture-faker framework.
//!
//! This module defines `Shape`, the closed universe of type shapes the
//! walker knows how to synthesise, together with the record and field
//! descriptors that carry per-field annotations.

use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Type shape of a value to synthesise.
///
/// Every value produced by the generator is described by a `Shape`. The
/// walker dispatches on it with exhaustive pattern matching, so adding a
/// variant is a compile-time checked change across the workspace.
///
/// # YAML Format
///
/// Scalar shapes can be specified as strings:
/// ```yaml
/// type: int32
/// type: string
/// type: timestamp
/// ```
///
/// Composite shapes use object format:
/// ```yaml
/// type:
///   type: slice
///   element: int64
/// type:
///   type: map
///   key: string
///   value: uint8
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Boolean value
    Bool,

    /// 8-bit signed integer
    Int8,

    /// 16-bit signed integer
    Int16,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    /// 8-bit unsigned integer
    Uint8,

    /// 16-bit unsigned integer
    Uint16,

    /// 32-bit unsigned integer
    Uint32,

    /// 64-bit unsigned integer
    Uint64,

    /// 32-bit IEEE 754 floating point
    Float32,

    /// 64-bit IEEE 754 floating point
    Float64,

    /// UTF-8 string
    String,

    /// Fixed-length array
    Array {
        /// Element shape
        element: Box<Shape>,
        /// Declared length
        len: usize,
    },

    /// Growable sequence that may be nil
    Slice {
        /// Element shape
        element: Box<Shape>,
    },

    /// Key/value map that may be nil
    Map {
        /// Key shape
        key: Box<Shape>,
        /// Value shape
        value: Box<Shape>,
    },

    /// Record with named, annotated fields
    Record(RecordShape),

    /// Nullable owning pointer
    Pointer {
        /// Pointee shape
        pointee: Box<Shape>,
    },

    /// Point in time (UTC)
    Timestamp,

    /// A shape with no synthesis rule (channels, functions, handles).
    Opaque {
        /// Human-readable name used in error messages
        name: String,
    },
}

impl Shape {
    /// Create a fixed-length array shape.
    pub fn array(element: Shape, len: usize) -> Self {
        Self::Array {
            element: Box::new(element),
            len,
        }
    }

    /// Create a slice shape.
    pub fn slice(element: Shape) -> Self {
        Self::Slice {
            element: Box::new(element),
        }
    }

    /// Create a map shape.
    pub fn map(key: Shape, value: Shape) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create a pointer shape.
    pub fn pointer(pointee: Shape) -> Self {
        Self::Pointer {
            pointee: Box::new(pointee),
        }
    }

    /// Create an opaque shape.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self::Opaque { name: name.into() }
    }

    /// Check if this shape is a signed integer of any width.
    pub fn is_signed_integer(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Check if this shape is an unsigned integer of any width.
    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    /// Check if this shape is an integer of any width.
    pub fn is_integer(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    /// Check if this shape is a float of either width.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Check if this shape is numeric (integer or float).
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Check if this shape is a scalar leaf (bool, number or string).
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool | Self::String) || self.is_numeric()
    }

    /// The zero value of this shape.
    ///
    /// Collections and pointers are nil, records hold the zero value of
    /// every field and timestamps sit at the Unix epoch.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Int8 => Value::Int8(0),
            Self::Int16 => Value::Int16(0),
            Self::Int32 => Value::Int32(0),
            Self::Int64 => Value::Int64(0),
            Self::Uint8 => Value::Uint8(0),
            Self::Uint16 => Value::Uint16(0),
            Self::Uint32 => Value::Uint32(0),
            Self::Uint64 => Value::Uint64(0),
            Self::Float32 => Value::Float32(0.0),
            Self::Float64 => Value::Float64(0.0),
            Self::String => Value::String(String::new()),
            Self::Array { element, len } => {
                Value::Array((0..*len).map(|_| element.zero_value()).collect())
            }
            Self::Slice { .. } => Value::Slice(None),
            Self::Map { .. } => Value::Map(None),
            Self::Record(record) => Value::Record(
                record
                    .fields
                    .iter()
                    .map(|f| (f.name.clone(), f.shape.zero_value()))
                    .collect::<BTreeMap<_, _>>(),
            ),
            // Opaque handles are nil-like, same as an unset pointer
            Self::Pointer { .. } | Self::Opaque { .. } => Value::Pointer(None),
            Self::Timestamp => Value::Timestamp(Default::default()),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int8 => f.write_str("int8"),
            Self::Int16 => f.write_str("int16"),
            Self::Int32 => f.write_str("int32"),
            Self::Int64 => f.write_str("int64"),
            Self::Uint8 => f.write_str("uint8"),
            Self::Uint16 => f.write_str("uint16"),
            Self::Uint32 => f.write_str("uint32"),
            Self::Uint64 => f.write_str("uint64"),
            Self::Float32 => f.write_str("float32"),
            Self::Float64 => f.write_str("float64"),
            Self::String => f.write_str("string"),
            Self::Array { element, len } => write!(f, "array<{element}; {len}>"),
            Self::Slice { element } => write!(f, "slice<{element}>"),
            Self::Map { key, value } => write!(f, "map<{key}, {value}>"),
            Self::Record(record) => write!(f, "record {}", record.name),
            Self::Pointer { pointee } => write!(f, "pointer<{pointee}>"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::Opaque { name } => write!(f, "opaque {name}"),
        }
    }
}

/// Record shape: a named, ordered list of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordShape {
    /// Record name
    pub name: String,

    /// Field descriptors in declaration order
    #[serde(default)]
    pub fields: Vec<FieldShape>,
}

impl RecordShape {
    /// Create an empty record shape.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field (builder style).
    pub fn field(mut self, field: FieldShape) -> Self {
        self.fields.push(field);
        self
    }

    /// Get a field descriptor by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldShape> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl From<RecordShape> for Shape {
    fn from(record: RecordShape) -> Self {
        Shape::Record(record)
    }
}

fn default_exported() -> bool {
    true
}

/// A record field: name, shape and raw annotation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldShape {
    /// Field name
    pub name: String,

    /// Declared shape of the field
    #[serde(rename = "type")]
    pub shape: Shape,

    /// Raw annotation text, e.g. `"unique,len=8"`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,

    /// Whether the generator may assign this field
    #[serde(default = "default_exported")]
    pub exported: bool,
}

impl FieldShape {
    /// Create an exported, untagged field.
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            tag: String::new(),
            exported: true,
        }
    }

    /// Attach annotation text.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Mark the field as not assignable by the generator.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

// Custom serialization/deserialization for Shape
// Supports both simple string format ("int32", "string") and object format ({"type": "slice", "element": "int32"})

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Bool => serializer.serialize_str("bool"),
            Self::Int8 => serializer.serialize_str("int8"),
            Self::Int16 => serializer.serialize_str("int16"),
            Self::Int32 => serializer.serialize_str("int32"),
            Self::Int64 => serializer.serialize_str("int64"),
            Self::Uint8 => serializer.serialize_str("uint8"),
            Self::Uint16 => serializer.serialize_str("uint16"),
            Self::Uint32 => serializer.serialize_str("uint32"),
            Self::Uint64 => serializer.serialize_str("uint64"),
            Self::Float32 => serializer.serialize_str("float32"),
            Self::Float64 => serializer.serialize_str("float64"),
            Self::String => serializer.serialize_str("string"),
            Self::Timestamp => serializer.serialize_str("timestamp"),

            Self::Array { element, len } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("element", element)?;
                map.serialize_entry("len", len)?;
                map.end()
            }
            Self::Slice { element } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "slice")?;
                map.serialize_entry("element", element)?;
                map.end()
            }
            Self::Map { key, value } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "map")?;
                map.serialize_entry("key", key)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            Self::Record(record) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "record")?;
                map.serialize_entry("name", &record.name)?;
                map.serialize_entry("fields", &record.fields)?;
                map.end()
            }
            Self::Pointer { pointee } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "pointer")?;
                map.serialize_entry("pointee", pointee)?;
                map.end()
            }
            Self::Opaque { name } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "opaque")?;
                map.serialize_entry("name", name)?;
                map.end()
            }
        }
    }
}

fn simple_shape(name: &str) -> Option<Shape> {
    let shape = match name {
        "bool" => Shape::Bool,
        "int8" | "tiny_int" => Shape::Int8,
        "int16" | "small_int" => Shape::Int16,
        "int32" | "int" => Shape::Int32,
        "int64" | "big_int" => Shape::Int64,
        "uint8" | "byte" => Shape::Uint8,
        "uint16" => Shape::Uint16,
        "uint32" => Shape::Uint32,
        "uint64" => Shape::Uint64,
        "float32" | "float" => Shape::Float32,
        "float64" | "double" => Shape::Float64,
        "string" | "text" => Shape::String,
        "timestamp" | "date_time" | "datetime" => Shape::Timestamp,
        _ => return None,
    };
    Some(shape)
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct ShapeVisitor;

        impl<'de> Visitor<'de> for ShapeVisitor {
            type Value = Shape;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or map representing a Shape")
            }

            // Handle string format: "int32", "string", etc.
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                simple_shape(value).ok_or_else(|| E::custom(format!("unknown simple shape: {value}")))
            }

            // Handle map format: {"type": "slice", "element": "int32"}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                if let Some(shape) = simple_shape(&type_name) {
                    return Ok(shape);
                }

                match type_name.as_str() {
                    "array" => {
                        let element: Shape = get_field_required(&fields, "element")?;
                        let len = get_field_required(&fields, "len")?;
                        Ok(Shape::array(element, len))
                    }
                    "slice" => {
                        let element: Shape = get_field_required(&fields, "element")?;
                        Ok(Shape::slice(element))
                    }
                    "map" => {
                        let key: Shape = get_field_required(&fields, "key")?;
                        let value: Shape = get_field_required(&fields, "value")?;
                        Ok(Shape::map(key, value))
                    }
                    "pointer" => {
                        let pointee: Shape = get_field_required(&fields, "pointee")?;
                        Ok(Shape::pointer(pointee))
                    }
                    "record" => {
                        let name = get_field_required(&fields, "name")?;
                        let record_fields = if fields.contains_key("fields") {
                            get_field_required(&fields, "fields")?
                        } else {
                            Vec::new()
                        };
                        Ok(Shape::Record(RecordShape {
                            name,
                            fields: record_fields,
                        }))
                    }
                    "opaque" => {
                        let name = get_field(&fields, "name").unwrap_or_else(|| "opaque".to_string());
                        Ok(Shape::Opaque { name })
                    }
                    _ => Err(M::Error::custom(format!("unknown shape: {type_name}"))),
                }
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}

// Helper functions for deserialization
fn get_field<T: for<'de> Deserialize<'de>>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<T> {
    fields
        .get(key)
        .and_then(|v| serde_yaml::from_value(v.clone()).ok())
}

fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}
