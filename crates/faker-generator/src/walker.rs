//! Recursive value synthesis over a [`Shape`].

use crate::config::FakerConfig;
use crate::directive::{Directive, Expression};
use crate::error::FakerError;
use crate::generators::{self, collection, literal, numeric, string};
use crate::registry::ProviderRegistry;
use crate::unique::{self, UniqueTracker};
use faker_core::{insert_entry, FieldShape, RecordShape, Shape, Value};
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use tracing::trace;

/// One synthesis pass, borrowing the session state it needs.
pub(crate) struct Walker<'a> {
    config: &'a FakerConfig,
    rng: &'a mut StdRng,
    registry: &'a ProviderRegistry,
    unique: &'a mut UniqueTracker,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(
        config: &'a FakerConfig,
        rng: &'a mut StdRng,
        registry: &'a ProviderRegistry,
        unique: &'a mut UniqueTracker,
    ) -> Self {
        Self {
            config,
            rng,
            registry,
            unique,
        }
    }

    /// Synthesise a value of `shape`.
    ///
    /// `current` is only consulted by records, whose `-` and `keep`
    /// fields read it. Nested pointers always get a fresh pointee.
    pub(crate) fn walk(&mut self, shape: &Shape, current: Option<&Value>) -> Result<Value, FakerError> {
        match shape {
            Shape::Pointer { pointee } => Ok(Value::Pointer(Some(Box::new(
                self.walk(pointee, None)?,
            )))),
            Shape::Record(record) => self.walk_record(record, current),
            Shape::Array { element, len } => {
                let items = (0..*len)
                    .map(|_| self.walk(element, None))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(items))
            }
            Shape::Slice { element } => {
                let Some(len) = self.collection_len() else {
                    return Ok(Value::Slice(None));
                };
                let items = (0..len)
                    .map(|_| self.walk(element, None))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Slice(Some(items)))
            }
            Shape::Map { key, value } => {
                let Some(len) = self.collection_len() else {
                    return Ok(Value::Map(None));
                };
                let mut entries = Vec::with_capacity(len);
                for _ in 0..len {
                    let k = self.walk(key, None)?;
                    let v = self.walk(value, None)?;
                    insert_entry(&mut entries, k, v);
                }
                Ok(Value::Map(Some(entries)))
            }
            Shape::Opaque { .. } => Err(FakerError::UnsupportedKind(shape.to_string())),
            scalar => generators::random_scalar(self.rng, scalar, self.config)?
                .ok_or_else(|| FakerError::UnsupportedKind(scalar.to_string())),
        }
    }

    /// Length for the next slice or map, or `None` when it should be nil.
    fn collection_len(&mut self) -> Option<usize> {
        let len = collection::collection_size(self.rng, self.config);
        if len == 0 && self.config.nil_on_empty {
            None
        } else {
            Some(len)
        }
    }

    fn walk_record(
        &mut self,
        record: &RecordShape,
        current: Option<&Value>,
    ) -> Result<Value, FakerError> {
        let current_fields = current.and_then(Value::as_record);
        let mut fields = BTreeMap::new();

        for field in &record.fields {
            let current_field = current_fields.and_then(|f| f.get(&field.name));

            if !field.exported {
                let value = current_field
                    .cloned()
                    .unwrap_or_else(|| field.shape.zero_value());
                fields.insert(field.name.clone(), value);
                continue;
            }

            let directive = Directive::parse(&field.tag)?;
            trace!(record = %record.name, field = %field.name, tag = %field.tag, "Filling field");

            let value = if directive.unique {
                self.unique_field_value(field, &directive, current_field)?
            } else {
                self.field_value(field, &directive, current_field)?
            };
            fields.insert(field.name.clone(), value);
        }

        Ok(Value::Record(fields))
    }

    fn unique_field_value(
        &mut self,
        field: &FieldShape,
        directive: &Directive,
        current: Option<&Value>,
    ) -> Result<Value, FakerError> {
        unique::retry_unique(&directive.tag, &field.name, || {
            let value = self.field_value(field, directive, current)?;
            Ok(self
                .unique
                .check_and_record(&directive.tag, &value)
                .then_some(value))
        })
    }

    fn field_value(
        &mut self,
        field: &FieldShape,
        directive: &Directive,
        current: Option<&Value>,
    ) -> Result<Value, FakerError> {
        if directive.keep {
            if matches!(
                field.shape,
                Shape::Record(_) | Shape::Timestamp | Shape::Array { .. } | Shape::Slice { .. }
            ) {
                return Err(FakerError::KeepNotAllowed {
                    field: field.name.clone(),
                    kind: field.shape.to_string(),
                });
            }
            if let Some(value) = current.filter(|v| !v.is_zero()) {
                return Ok(value.clone());
            }
        }

        match &directive.expression {
            Expression::Default => self.walk(&field.shape, current),
            Expression::Skip => Ok(current
                .cloned()
                .unwrap_or_else(|| field.shape.zero_value())),
            _ => self.tagged(&field.shape, directive),
        }
    }

    /// Synthesise a value of `shape` as the tag expression asks.
    ///
    /// A registered provider named by the tag fills a whole map. Otherwise
    /// collections and pointers apply the tag to each element, key, value
    /// or pointee, and a provider wins over the built-in forms at every leaf.
    pub(crate) fn tagged(&mut self, shape: &Shape, directive: &Directive) -> Result<Value, FakerError> {
        let tag = directive.tag.as_str();

        match shape {
            Shape::Pointer { pointee } => {
                return Ok(Value::Pointer(Some(Box::new(
                    self.tagged(pointee, directive)?,
                ))))
            }
            Shape::Array { element, len } => {
                let items = (0..*len)
                    .map(|_| self.tagged(element, directive))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Value::Array(items));
            }
            Shape::Slice { element } => {
                let Some(len) = self.collection_len() else {
                    return Ok(Value::Slice(None));
                };
                let items = (0..len)
                    .map(|_| self.tagged(element, directive))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Value::Slice(Some(items)));
            }
            Shape::Map { .. } if self.registry.contains(tag) => {
                return self.registry.invoke(tag, shape, self.rng);
            }
            Shape::Map { key, value } => {
                let Some(len) = self.collection_len() else {
                    return Ok(Value::Map(None));
                };
                let mut entries = Vec::with_capacity(len);
                for _ in 0..len {
                    let k = self.tagged(key, directive)?;
                    let v = self.tagged(value, directive)?;
                    insert_entry(&mut entries, k, v);
                }
                return Ok(Value::Map(Some(entries)));
            }
            Shape::Opaque { .. } => return Err(FakerError::UnsupportedKind(shape.to_string())),
            _ => {}
        }

        if self.registry.contains(tag) {
            return self.registry.invoke(tag, shape, self.rng);
        }

        let not_for_kind = || FakerError::TagNotSupportedForKind {
            tag: tag.to_string(),
            kind: shape.to_string(),
        };

        match &directive.expression {
            Expression::Named(_) | Expression::Default | Expression::Skip => {
                Err(FakerError::UnsupportedTag(tag.to_string()))
            }
            Expression::Use(lit) => literal::parse_literal(shape, lit, tag),
            Expression::Len(n) => match shape {
                Shape::String => Ok(Value::String(string::random_string(self.rng, *n))),
                _ => Err(not_for_kind()),
            },
            Expression::Boundary { start, end } => match shape {
                s if s.is_integer() => {
                    let n = numeric::draw_integer(self.rng, *start, *end)?;
                    numeric::wrap_integer(s, n).ok_or_else(not_for_kind)
                }
                s if s.is_float() => {
                    numeric::draw_float(self.rng, s, *start, *end)?.ok_or_else(not_for_kind)
                }
                _ => Err(not_for_kind()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct Session {
        config: FakerConfig,
        rng: StdRng,
        registry: ProviderRegistry,
        unique: UniqueTracker,
    }

    impl Session {
        fn new(config: FakerConfig) -> Self {
            Self {
                config,
                rng: StdRng::seed_from_u64(42),
                registry: ProviderRegistry::with_builtins(),
                unique: UniqueTracker::new(),
            }
        }

        fn walker(&mut self) -> Walker<'_> {
            Walker::new(
                &self.config,
                &mut self.rng,
                &self.registry,
                &mut self.unique,
            )
        }
    }

    fn record(fields: Vec<FieldShape>) -> Shape {
        let mut record = RecordShape::new("Sample");
        for field in fields {
            record = record.field(field);
        }
        Shape::Record(record)
    }

    fn fill(session: &mut Session, shape: &Shape) -> Result<Value, FakerError> {
        session.walker().walk(shape, None)
    }

    #[test]
    fn test_untagged_scalars_follow_config() {
        let mut session = Session::new(FakerConfig::default());
        let shape = record(vec![
            FieldShape::new("n", Shape::Int16),
            FieldShape::new("s", Shape::String),
        ]);

        for _ in 0..20 {
            let value = fill(&mut session, &shape).unwrap();
            assert!(matches!(value.get_field("n"), Some(Value::Int16(n)) if (0..100).contains(n)));
            assert!(matches!(value.get_field("s"), Some(Value::String(s)) if s.len() == 25));
        }
    }

    #[test]
    fn test_fixed_length_array() {
        let mut session = Session::new(FakerConfig::default());
        let value = fill(&mut session, &Shape::array(Shape::Bool, 4)).unwrap();
        assert_eq!(value.as_items().map(<[Value]>::len), Some(4));
    }

    #[test]
    fn test_nil_on_empty() {
        let mut session = Session::new(FakerConfig {
            nil_on_empty: true,
            force_empty_collections: true,
            ..FakerConfig::default()
        });
        assert_eq!(
            fill(&mut session, &Shape::slice(Shape::Int32)).unwrap(),
            Value::Slice(None)
        );
        assert_eq!(
            fill(&mut session, &Shape::map(Shape::String, Shape::Int32)).unwrap(),
            Value::Map(None)
        );

        session.config.nil_on_empty = false;
        assert_eq!(
            fill(&mut session, &Shape::slice(Shape::Int32)).unwrap(),
            Value::Slice(Some(vec![]))
        );
        assert_eq!(
            fill(&mut session, &Shape::map(Shape::String, Shape::Int32)).unwrap(),
            Value::Map(Some(vec![]))
        );
    }

    #[test]
    fn test_opaque_is_unsupported() {
        let mut session = Session::new(FakerConfig::default());
        let shape = record(vec![FieldShape::new("ch", Shape::opaque("chan"))]);
        let err = fill(&mut session, &shape).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported kind: opaque chan");
    }

    #[test]
    fn test_private_field_untouched() {
        let mut session = Session::new(FakerConfig::default());
        let shape = record(vec![
            FieldShape::new("secret", Shape::Int64).private(),
            FieldShape::new("public", Shape::Int64),
        ]);
        let current = Value::Record(BTreeMap::from([
            ("secret".to_string(), Value::Int64(-9)),
            ("public".to_string(), Value::Int64(-9)),
        ]));

        let value = session.walker().walk(&shape, Some(&current)).unwrap();
        assert_eq!(value.get_field("secret"), Some(&Value::Int64(-9)));
        assert_ne!(value.get_field("public"), Some(&Value::Int64(-9)));
    }

    #[test]
    fn test_nested_record_honours_skip() {
        let mut session = Session::new(FakerConfig::default());
        let inner = RecordShape::new("Inner").field(FieldShape::new("id", Shape::Int64).with_tag("-"));
        let shape = record(vec![FieldShape::new("inner", Shape::Record(inner))]);
        let current = Value::Record(BTreeMap::from([(
            "inner".to_string(),
            Value::Record(BTreeMap::from([("id".to_string(), Value::Int64(4242))])),
        )]));

        let value = session.walker().walk(&shape, Some(&current)).unwrap();
        assert_eq!(
            value.get_field("inner").and_then(|v| v.get_field("id")),
            Some(&Value::Int64(4242))
        );
    }

    #[test]
    fn test_tagged_slice_applies_tag_per_element() {
        let mut session = Session::new(FakerConfig {
            collection_size: 5,
            fixed_collection_size: true,
            ..FakerConfig::default()
        });
        let shape = record(vec![
            FieldShape::new("words", Shape::slice(Shape::String)).with_tag("len=3"),
            FieldShape::new("ids", Shape::map(Shape::Uint8, Shape::Uint8))
                .with_tag("boundary_start=1,boundary_end=2"),
        ]);

        let value = fill(&mut session, &shape).unwrap();
        let words = value.get_field("words").and_then(Value::as_items).unwrap();
        assert_eq!(words.len(), 5);
        assert!(words
            .iter()
            .all(|w| matches!(w, Value::String(s) if s.len() == 3)));

        // Every key collides, so the map holds a single entry
        let ids = value.get_field("ids").and_then(Value::as_entries).unwrap();
        assert_eq!(ids, &[(Value::Uint8(1), Value::Uint8(1))]);
    }

    #[test]
    fn test_tagged_pointer() {
        let mut session = Session::new(FakerConfig::default());
        let shape = record(vec![
            FieldShape::new("name", Shape::pointer(Shape::String)).with_tag("use=Power")
        ]);

        let value = fill(&mut session, &shape).unwrap();
        assert_eq!(
            value.get_field("name").and_then(Value::as_pointee),
            Some(&Value::String("Power".to_string()))
        );
    }

    #[test]
    fn test_provider_on_string_field() {
        let mut session = Session::new(FakerConfig::default());
        let shape = record(vec![FieldShape::new("id", Shape::String).with_tag("uuid_hyphenated")]);

        let value = fill(&mut session, &shape).unwrap();
        let Some(Value::String(id)) = value.get_field("id") else {
            panic!("Expected string");
        };
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_tag_errors() {
        let mut session = Session::new(FakerConfig::default());

        let shape = record(vec![FieldShape::new("n", Shape::Int32).with_tag("len=3")]);
        assert!(matches!(
            fill(&mut session, &shape),
            Err(FakerError::TagNotSupportedForKind { .. })
        ));

        let shape = record(vec![FieldShape::new("n", Shape::Int32).with_tag("no_such_provider")]);
        assert_eq!(
            fill(&mut session, &shape).unwrap_err().to_string(),
            "Tag unsupported: no_such_provider"
        );

        let shape = record(vec![FieldShape::new("b", Shape::Bool).with_tag("len=3")]);
        assert!(matches!(
            fill(&mut session, &shape),
            Err(FakerError::TagNotSupportedForKind { .. })
        ));

        let shape = record(vec![FieldShape::new("t", Shape::Timestamp).with_tag("use=now")]);
        assert!(matches!(
            fill(&mut session, &shape),
            Err(FakerError::TagNotSupportedForKind { .. })
        ));

        let shape = record(vec![
            FieldShape::new("n", Shape::Int32).with_tag("boundary_start=5,boundary_end=1")
        ]);
        assert!(matches!(
            fill(&mut session, &shape),
            Err(FakerError::InvalidBoundary { start: 5, end: 1 })
        ));
    }

    #[test]
    fn test_keep_rules() {
        let mut session = Session::new(FakerConfig::default());
        let shape = record(vec![FieldShape::new("n", Shape::Int64).with_tag("keep")]);

        let current = Value::Record(BTreeMap::from([("n".to_string(), Value::Int64(7))]));
        let value = session.walker().walk(&shape, Some(&current)).unwrap();
        assert_eq!(value.get_field("n"), Some(&Value::Int64(7)));

        let shape = record(vec![FieldShape::new("s", Shape::slice(Shape::Int64)).with_tag("keep")]);
        assert!(matches!(
            fill(&mut session, &shape),
            Err(FakerError::KeepNotAllowed { .. })
        ));
    }

    #[test]
    fn test_unique_domain_exhaustion() {
        let mut session = Session::new(FakerConfig::default());
        let shape = record(vec![
            FieldShape::new("n", Shape::Int64).with_tag("unique,boundary_start=0,boundary_end=3")
        ]);

        let mut seen = Vec::new();
        for _ in 0..3 {
            let value = fill(&mut session, &shape).unwrap();
            seen.push(value.get_field("n").cloned().unwrap());
        }
        seen.sort_by_key(|v| v.as_i64());
        assert_eq!(seen, vec![Value::Int64(0), Value::Int64(1), Value::Int64(2)]);

        let err = fill(&mut session, &shape).unwrap_err();
        assert!(matches!(err, FakerError::UniqueExhausted(ref f) if f == "n"));
    }
}
