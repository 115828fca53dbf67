//! Type descriptors for the fakegen value universe.
//!
//! This module defines `FakeType`, the closed set of value kinds the
//! generation engine knows how to populate. Every Rust type that takes part
//! in generation describes itself as a `FakeType` through the
//! [`Fakeable`](crate::Fakeable) trait.

use crate::values::{FakeRecord, FakeValue};
use chrono::{DateTime, Utc};

/// Type descriptor for a generation destination.
///
/// The variant set mirrors the shapes a caller can hand to the engine:
/// scalar leaves, an instant in time, pointers, sequences, fixed arrays,
/// mappings and records (structs with named fields).
///
/// Self-referential record types are not supported: describing one recurses
/// without termination.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeType {
    /// Boolean
    Bool,

    // Signed integers
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// Pointer-sized signed integer
    Isize,

    // Unsigned integers
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// Pointer-sized unsigned integer
    Usize,

    // Floating point
    /// 32-bit IEEE 754 floating point
    F32,
    /// 64-bit IEEE 754 floating point
    F64,

    /// UTF-8 string
    String,

    /// UTC timestamp, generated near the current moment
    Instant,

    /// Nullable or boxed indirection (`Option<T>`, `Box<T>`)
    Pointer(Box<FakeType>),

    /// Variable-size sequence (`Vec<T>`)
    Seq(Box<FakeType>),

    /// Fixed-size array (`[T; N]`)
    Array {
        /// Element type
        element: Box<FakeType>,
        /// Static length
        len: usize,
    },

    /// Key/value mapping (`HashMap<K, V>`, `BTreeMap<K, V>`)
    Map {
        /// Key type
        key: Box<FakeType>,
        /// Value type
        value: Box<FakeType>,
    },

    /// Struct with named fields
    Record(RecordType),

    /// A kind with no generation rule
    Unsupported(&'static str),
}

impl FakeType {
    /// Shorthand for `FakeType::Pointer`.
    pub fn pointer(inner: FakeType) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Shorthand for `FakeType::Seq`.
    pub fn seq(element: FakeType) -> Self {
        Self::Seq(Box::new(element))
    }

    /// Shorthand for `FakeType::Array`.
    pub fn array(element: FakeType, len: usize) -> Self {
        Self::Array {
            element: Box::new(element),
            len,
        }
    }

    /// Shorthand for `FakeType::Map`.
    pub fn map(key: FakeType, value: FakeType) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Human-readable kind name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Instant => "instant",
            Self::Pointer(_) => "pointer",
            Self::Seq(_) => "seq",
            Self::Array { .. } => "array",
            Self::Map { .. } => "map",
            Self::Record(record) => record.name,
            Self::Unsupported(name) => name,
        }
    }

    /// Whether this is a record, sequence, array or map.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Record(_) | Self::Seq(_) | Self::Array { .. } | Self::Map { .. }
        )
    }

    /// Whether this is any integer width, signed or unsigned.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::Usize
        )
    }

    /// Whether this is `f32` or `f64`.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Whether this is an integer or a float.
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// The zero value of this type.
    ///
    /// Pointers, sequences and maps are `Nil`; arrays hold `len` zero
    /// elements; records hold the zero value of every field.
    pub fn zero_value(&self) -> FakeValue {
        match self {
            Self::Bool => FakeValue::Bool(false),
            Self::I8 => FakeValue::I8(0),
            Self::I16 => FakeValue::I16(0),
            Self::I32 => FakeValue::I32(0),
            Self::I64 => FakeValue::I64(0),
            Self::Isize => FakeValue::Isize(0),
            Self::U8 => FakeValue::U8(0),
            Self::U16 => FakeValue::U16(0),
            Self::U32 => FakeValue::U32(0),
            Self::U64 => FakeValue::U64(0),
            Self::Usize => FakeValue::Usize(0),
            Self::F32 => FakeValue::F32(0.0),
            Self::F64 => FakeValue::F64(0.0),
            Self::String => FakeValue::String(String::new()),
            Self::Instant => FakeValue::Instant(DateTime::<Utc>::UNIX_EPOCH),
            Self::Pointer(_) | Self::Seq(_) | Self::Map { .. } | Self::Unsupported(_) => {
                FakeValue::Nil
            }
            Self::Array { element, len } => {
                FakeValue::Seq((0..*len).map(|_| element.zero_value()).collect())
            }
            Self::Record(record) => FakeValue::Record(FakeRecord::new(
                record
                    .fields
                    .iter()
                    .map(|field| (field.name.to_string(), field.ty.zero_value()))
                    .collect(),
            )),
        }
    }
}

/// Descriptor of a struct with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    /// Struct name
    pub name: &'static str,

    /// Fields in declaration order
    pub fields: Vec<FieldType>,
}

impl RecordType {
    /// Create a new record descriptor.
    pub fn new(name: &'static str, fields: Vec<FieldType>) -> Self {
        Self { name, fields }
    }

    /// Get a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldType> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

/// Descriptor of one record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldType {
    /// Field name
    pub name: &'static str,

    /// Declared type
    pub ty: FakeType,

    /// Raw `#[faker("...")]` annotation, empty when absent
    pub tag: &'static str,

    /// Whether the field is externally visible and may be written
    pub settable: bool,
}

impl FieldType {
    /// Create a settable field descriptor.
    pub fn new(name: &'static str, ty: FakeType, tag: &'static str) -> Self {
        Self {
            name,
            ty,
            tag,
            settable: true,
        }
    }

    /// Create a field descriptor that the engine must not write.
    pub fn private(name: &'static str, ty: FakeType, tag: &'static str) -> Self {
        Self {
            name,
            ty,
            tag,
            settable: false,
        }
    }
}
