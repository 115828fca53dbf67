//! Value representations for the fakegen value universe.
//!
//! `FakeValue` is what the generation engine produces and what providers
//! return. It carries the exact width of every scalar so that a value can be
//! written back into the caller's static type without guessing.

use crate::types::FakeType;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Error converting a `FakeValue` back into a Rust type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// The value has a different kind than the destination
    #[error("Expected {expected} value, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A record value lacks one of the destination's fields
    #[error("Field '{field}' missing from {record} value")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// A fixed array value has the wrong number of elements
    #[error("Expected array of length {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl ConvertError {
    /// Build a kind mismatch for `value` against the `expected` kind.
    pub fn mismatch(expected: &'static str, value: &FakeValue) -> Self {
        Self::KindMismatch {
            expected,
            found: value.kind_name(),
        }
    }
}

/// A generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeValue {
    /// Null pointer or absent collection
    Nil,

    /// Boolean value
    Bool(bool),

    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),

    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),

    F32(f32),
    F64(f64),

    /// String value
    String(String),

    /// Point in time
    Instant(DateTime<Utc>),

    /// Allocated pointer target
    Pointer(Box<FakeValue>),

    /// Sequence or fixed array elements
    Seq(Vec<FakeValue>),

    /// Mapping entries in generation order
    Map(Vec<(FakeValue, FakeValue)>),

    /// Struct field values
    Record(FakeRecord),
}

impl FakeValue {
    /// Shorthand for `FakeValue::Pointer`.
    pub fn pointer(inner: FakeValue) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Kind name of this value, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::Usize(_) => "usize",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Instant(_) => "instant",
            Self::Pointer(_) => "pointer",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
        }
    }

    /// Check if this value is nil.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
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

    /// Try to get any integer width as an i64.
    ///
    /// Unsigned values above `i64::MAX` wrap.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(i) => Some(i as i64),
            Self::I16(i) => Some(i as i64),
            Self::I32(i) => Some(i as i64),
            Self::I64(i) => Some(i),
            Self::Isize(i) => Some(i as i64),
            Self::U8(u) => Some(u as i64),
            Self::U16(u) => Some(u as i64),
            Self::U32(u) => Some(u as i64),
            Self::U64(u) => Some(u as i64),
            Self::Usize(u) => Some(u as i64),
            _ => None,
        }
    }

    /// Try to get any numeric value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(f) => Some(f as f64),
            Self::F64(f) => Some(f),
            Self::U64(u) => Some(u as f64),
            Self::Usize(u) => Some(u as f64),
            _ => self.as_i64().map(|i| i as f64),
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_instant(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Instant(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get the elements of a sequence.
    pub fn as_seq(&self) -> Option<&[FakeValue]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the entries of a map.
    pub fn as_map(&self) -> Option<&[(FakeValue, FakeValue)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to get this value as a record.
    pub fn as_record(&self) -> Option<&FakeRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Coerce a numeric, boolean or string value to the numeric kind `ty`.
    ///
    /// Float-to-integer and wide-to-narrow conversions truncate the way `as`
    /// casts do. Strings are parsed as an integer, then as a float; strings
    /// that parse as neither become zero. Returns `None` when `ty` is not
    /// numeric or the value cannot be coerced at all (`Nil`, composites).
    pub fn cast_numeric(&self, ty: &FakeType) -> Option<FakeValue> {
        let number = match self {
            Self::Bool(b) => Number::Int(*b as i128),
            Self::F32(f) => Number::Float(*f as f64),
            Self::F64(f) => Number::Float(*f),
            Self::U64(u) => Number::Int(*u as i128),
            Self::Usize(u) => Number::Int(*u as i128),
            Self::String(s) => {
                let s = s.trim();
                if let Ok(i) = s.parse::<i128>() {
                    Number::Int(i)
                } else if let Ok(f) = s.parse::<f64>() {
                    Number::Float(f)
                } else {
                    Number::Int(0)
                }
            }
            other => Number::Int(other.as_i64()? as i128),
        };
        number.into_value(ty)
    }
}

/// Intermediate numeric form used by `cast_numeric`.
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn into_value(self, ty: &FakeType) -> Option<FakeValue> {
        macro_rules! cast {
            ($variant:ident, $t:ty) => {
                match self {
                    Number::Int(i) => FakeValue::$variant(i as $t),
                    Number::Float(f) => FakeValue::$variant(f as $t),
                }
            };
        }

        let value = match ty {
            FakeType::I8 => cast!(I8, i8),
            FakeType::I16 => cast!(I16, i16),
            FakeType::I32 => cast!(I32, i32),
            FakeType::I64 => cast!(I64, i64),
            FakeType::Isize => cast!(Isize, isize),
            FakeType::U8 => cast!(U8, u8),
            FakeType::U16 => cast!(U16, u16),
            FakeType::U32 => cast!(U32, u32),
            FakeType::U64 => cast!(U64, u64),
            FakeType::Usize => cast!(Usize, usize),
            FakeType::F32 => cast!(F32, f32),
            FakeType::F64 => cast!(F64, f64),
            _ => return None,
        };
        Some(value)
    }
}

impl Serialize for FakeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self.clone()).serialize(serializer)
    }
}

/// Field values of a record, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FakeRecord {
    fields: Vec<(String, FakeValue)>,
}

impl FakeRecord {
    /// Create a record from `(field name, value)` pairs.
    pub fn new(fields: Vec<(String, FakeValue)>) -> Self {
        Self { fields }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&FakeValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Set a field value, appending the field if it is not present yet.
    pub fn set(&mut self, name: impl Into<String>, value: FakeValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Remove and return a field value for conversion into `record`'s type.
    pub fn take(
        &mut self,
        record: &'static str,
        field: &'static str,
    ) -> Result<FakeValue, ConvertError> {
        let idx = self
            .fields
            .iter()
            .position(|(name, _)| name == field)
            .ok_or(ConvertError::MissingField { record, field })?;
        Ok(self.fields.swap_remove(idx).1)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FakeValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for FakeRecord {
    type Item = (String, FakeValue);
    type IntoIter = std::vec::IntoIter<(String, FakeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_truncates_to_target_width() {
        assert_eq!(
            FakeValue::I64(300).cast_numeric(&FakeType::U8),
            Some(FakeValue::U8(44))
        );
        assert_eq!(
            FakeValue::I64(-1).cast_numeric(&FakeType::U16),
            Some(FakeValue::U16(u16::MAX))
        );
        assert_eq!(
            FakeValue::F64(42.9).cast_numeric(&FakeType::I32),
            Some(FakeValue::I32(42))
        );
        assert_eq!(
            FakeValue::I32(7).cast_numeric(&FakeType::F64),
            Some(FakeValue::F64(7.0))
        );
    }

    #[test]
    fn test_cast_parses_strings() {
        assert_eq!(
            FakeValue::String("123".to_string()).cast_numeric(&FakeType::I64),
            Some(FakeValue::I64(123))
        );
        assert_eq!(
            FakeValue::String(" 1.5 ".to_string()).cast_numeric(&FakeType::F32),
            Some(FakeValue::F32(1.5))
        );
        assert_eq!(
            FakeValue::String("not a number".to_string()).cast_numeric(&FakeType::I8),
            Some(FakeValue::I8(0))
        );
    }

    #[test]
    fn test_cast_rejects_non_numeric() {
        assert_eq!(FakeValue::Nil.cast_numeric(&FakeType::I32), None);
        assert_eq!(FakeValue::Seq(vec![]).cast_numeric(&FakeType::I32), None);
        assert_eq!(FakeValue::I32(1).cast_numeric(&FakeType::String), None);
        assert_eq!(
            FakeValue::Bool(true).cast_numeric(&FakeType::U32),
            Some(FakeValue::U32(1))
        );
    }

    #[test]
    fn test_record_take_and_set() {
        let mut record = FakeRecord::new(vec![
            ("name".to_string(), FakeValue::String("x".to_string())),
            ("age".to_string(), FakeValue::U8(3)),
        ]);

        record.set("age", FakeValue::U8(4));
        record.set("email", FakeValue::Nil);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("age"), Some(&FakeValue::U8(4)));

        assert_eq!(record.take("User", "age"), Ok(FakeValue::U8(4)));
        assert_eq!(
            record.take("User", "age"),
            Err(ConvertError::MissingField {
                record: "User",
                field: "age"
            })
        );
    }

    #[test]
    fn test_as_i64_widens_every_integer() {
        assert_eq!(FakeValue::U8(200).as_i64(), Some(200));
        assert_eq!(FakeValue::I16(-5).as_i64(), Some(-5));
        assert_eq!(FakeValue::String("5".to_string()).as_i64(), None);
        assert_eq!(FakeValue::F32(0.5).as_f64(), Some(0.5));
    }
}
