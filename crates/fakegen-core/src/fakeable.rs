//! Bridge between Rust types and the fakegen value universe.
//!
//! A type takes part in generation by implementing [`Fakeable`]: it
//! describes its shape as a [`FakeType`], exposes its current value as a
//! [`FakeValue`], and rebuilds itself from a generated [`FakeValue`].
//! Structs normally get an implementation from `#[derive(Fakeable)]`.

use crate::types::FakeType;
use crate::values::{ConvertError, FakeValue};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A type the generation engine can populate.
pub trait Fakeable: Sized {
    /// Describe the static shape of this type.
    fn fake_type() -> FakeType;

    /// Project the current value into the value universe.
    fn to_fake(&self) -> FakeValue;

    /// Rebuild a value from a generated `FakeValue`.
    fn from_fake(value: FakeValue) -> Result<Self, ConvertError>;
}

macro_rules! impl_scalar {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Fakeable for $t {
                fn fake_type() -> FakeType {
                    FakeType::$variant
                }

                fn to_fake(&self) -> FakeValue {
                    FakeValue::$variant(self.clone())
                }

                fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
                    match value {
                        FakeValue::$variant(v) => Ok(v),
                        other => Err(ConvertError::mismatch(stringify!($t), &other)),
                    }
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl Fakeable for DateTime<Utc> {
    fn fake_type() -> FakeType {
        FakeType::Instant
    }

    fn to_fake(&self) -> FakeValue {
        FakeValue::Instant(*self)
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        match value {
            FakeValue::Instant(dt) => Ok(dt),
            other => Err(ConvertError::mismatch("instant", &other)),
        }
    }
}

/// The unit type has no generation rule; it exists so callers can observe
/// the unsupported-kind failure.
impl Fakeable for () {
    fn fake_type() -> FakeType {
        FakeType::Unsupported("()")
    }

    fn to_fake(&self) -> FakeValue {
        FakeValue::Nil
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        match value {
            FakeValue::Nil => Ok(()),
            other => Err(ConvertError::mismatch("()", &other)),
        }
    }
}

impl<T: Fakeable> Fakeable for Option<T> {
    fn fake_type() -> FakeType {
        FakeType::pointer(T::fake_type())
    }

    fn to_fake(&self) -> FakeValue {
        match self {
            Some(inner) => FakeValue::pointer(inner.to_fake()),
            None => FakeValue::Nil,
        }
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        match value {
            FakeValue::Nil => Ok(None),
            FakeValue::Pointer(inner) => T::from_fake(*inner).map(Some),
            other => Err(ConvertError::mismatch("pointer", &other)),
        }
    }
}

impl<T: Fakeable> Fakeable for Box<T> {
    fn fake_type() -> FakeType {
        FakeType::pointer(T::fake_type())
    }

    fn to_fake(&self) -> FakeValue {
        FakeValue::pointer(self.as_ref().to_fake())
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        // A box cannot be null; a nil pointer rebuilds the pointee's zero value.
        match value {
            FakeValue::Nil => T::from_fake(T::fake_type().zero_value()).map(Box::new),
            FakeValue::Pointer(inner) => T::from_fake(*inner).map(Box::new),
            other => Err(ConvertError::mismatch("pointer", &other)),
        }
    }
}

impl<T: Fakeable> Fakeable for Vec<T> {
    fn fake_type() -> FakeType {
        FakeType::seq(T::fake_type())
    }

    fn to_fake(&self) -> FakeValue {
        FakeValue::Seq(self.iter().map(Fakeable::to_fake).collect())
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        match value {
            FakeValue::Nil => Ok(Vec::new()),
            FakeValue::Seq(items) => items.into_iter().map(T::from_fake).collect(),
            other => Err(ConvertError::mismatch("seq", &other)),
        }
    }
}

impl<T: Fakeable, const N: usize> Fakeable for [T; N] {
    fn fake_type() -> FakeType {
        FakeType::array(T::fake_type(), N)
    }

    fn to_fake(&self) -> FakeValue {
        FakeValue::Seq(self.iter().map(Fakeable::to_fake).collect())
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        let items = match value {
            FakeValue::Seq(items) => items,
            other => return Err(ConvertError::mismatch("array", &other)),
        };
        let found = items.len();
        let elements = items
            .into_iter()
            .map(T::from_fake)
            .collect::<Result<Vec<T>, _>>()?;
        elements
            .try_into()
            .map_err(|_| ConvertError::LengthMismatch { expected: N, found })
    }
}

impl<K: Fakeable + Eq + Hash, V: Fakeable> Fakeable for HashMap<K, V> {
    fn fake_type() -> FakeType {
        FakeType::map(K::fake_type(), V::fake_type())
    }

    fn to_fake(&self) -> FakeValue {
        FakeValue::Map(self.iter().map(|(k, v)| (k.to_fake(), v.to_fake())).collect())
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        match value {
            FakeValue::Nil => Ok(HashMap::new()),
            FakeValue::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok::<_, ConvertError>((K::from_fake(k)?, V::from_fake(v)?)))
                .collect(),
            other => Err(ConvertError::mismatch("map", &other)),
        }
    }
}

impl<K: Fakeable + Ord, V: Fakeable> Fakeable for BTreeMap<K, V> {
    fn fake_type() -> FakeType {
        FakeType::map(K::fake_type(), V::fake_type())
    }

    fn to_fake(&self) -> FakeValue {
        FakeValue::Map(self.iter().map(|(k, v)| (k.to_fake(), v.to_fake())).collect())
    }

    fn from_fake(value: FakeValue) -> Result<Self, ConvertError> {
        match value {
            FakeValue::Nil => Ok(BTreeMap::new()),
            FakeValue::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok::<_, ConvertError>((K::from_fake(k)?, V::from_fake(v)?)))
                .collect(),
            other => Err(ConvertError::mismatch("map", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_round_trip_keeps_width() {
        assert_eq!(42u16.to_fake(), FakeValue::U16(42));
        assert_eq!(u16::from_fake(FakeValue::U16(42)), Ok(42));
        assert_eq!(
            u16::from_fake(FakeValue::U32(42)),
            Err(ConvertError::KindMismatch {
                expected: "u16",
                found: "u32"
            })
        );
    }

    #[test]
    fn test_option_maps_to_pointer() {
        assert_eq!(Option::<i32>::fake_type(), FakeType::pointer(FakeType::I32));
        assert_eq!(None::<i32>.to_fake(), FakeValue::Nil);
        assert_eq!(
            Option::<i32>::from_fake(FakeValue::pointer(FakeValue::I32(3))),
            Ok(Some(3))
        );
        assert_eq!(Option::<i32>::from_fake(FakeValue::Nil), Ok(None));
    }

    #[test]
    fn test_box_nil_is_zero_pointee() {
        assert_eq!(Box::<bool>::from_fake(FakeValue::Nil), Ok(Box::new(false)));
        assert!(Box::<bool>::from_fake(FakeValue::I8(1)).is_err());
        assert_eq!(
            Box::<bool>::from_fake(FakeValue::pointer(FakeValue::Bool(true))),
            Ok(Box::new(true))
        );
    }

    #[test]
    fn test_vec_accepts_nil_as_empty() {
        assert_eq!(Vec::<String>::from_fake(FakeValue::Nil), Ok(vec![]));
        assert_eq!(
            Vec::<u8>::from_fake(FakeValue::Seq(vec![FakeValue::U8(1), FakeValue::U8(2)])),
            Ok(vec![1, 2])
        );
    }

    #[test]
    fn test_array_checks_length() {
        assert_eq!(<[u8; 2]>::fake_type(), FakeType::array(FakeType::U8, 2));
        assert_eq!(
            <[u8; 2]>::from_fake(FakeValue::Seq(vec![FakeValue::U8(1), FakeValue::U8(2)])),
            Ok([1, 2])
        );
        assert_eq!(
            <[u8; 2]>::from_fake(FakeValue::Seq(vec![FakeValue::U8(1)])),
            Err(ConvertError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_maps_from_entries() {
        let value = FakeValue::Map(vec![(
            FakeValue::String("a".to_string()),
            FakeValue::I64(1),
        )]);

        let hash = HashMap::<String, i64>::from_fake(value.clone()).unwrap();
        assert_eq!(hash.get("a"), Some(&1));

        let btree = BTreeMap::<String, i64>::from_fake(value).unwrap();
        assert_eq!(btree.get("a"), Some(&1));

        assert!(HashMap::<String, i64>::from_fake(FakeValue::Nil)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unit_is_unsupported() {
        assert_eq!(<()>::fake_type(), FakeType::Unsupported("()"));
        assert_eq!(<()>::from_fake(FakeValue::Nil), Ok(()));
    }
}
