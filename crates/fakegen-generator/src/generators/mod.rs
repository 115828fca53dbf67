//! Type-directed value generation.
//!
//! [`generate`] walks a [`FakeType`] and produces a [`FakeValue`] of the same
//! shape. Scalars are drawn from the generator's settings, containers are
//! sized by the size policy, and records are walked field by field in
//! [`record`], where tags can route a field to [`tagged`] generation.

pub mod record;
pub mod tagged;
pub mod timestamp;

use crate::error::{FakeError, Result};
use crate::generator::Faker;
use crate::random::{random_integer, random_string};
use fakegen_core::{FakeType, FakeValue};
use rand::Rng;

/// Generate an untagged value of type `ty`.
///
/// `current` is the destination's present value. It is consulted only where
/// it carries information down the tree: the pointee of a set pointer,
/// array elements, and record fields (for `keep` and unsettable fields).
pub fn generate(faker: &mut Faker, ty: &FakeType, current: &FakeValue) -> Result<FakeValue> {
    match ty {
        FakeType::Bool => Ok(FakeValue::Bool(faker.rng.gen_bool(0.5))),

        FakeType::I8
        | FakeType::I16
        | FakeType::I32
        | FakeType::I64
        | FakeType::Isize
        | FakeType::U8
        | FakeType::U16
        | FakeType::U32
        | FakeType::U64
        | FakeType::Usize => {
            let value = random_integer(&mut faker.rng, faker.boundary);
            narrow(FakeValue::I64(value), ty)
        }

        FakeType::F32 => Ok(FakeValue::F32(faker.rng.gen::<f32>())),
        FakeType::F64 => Ok(FakeValue::F64(faker.rng.gen::<f64>())),

        FakeType::String => Ok(FakeValue::String(random_string(
            &mut faker.rng,
            faker.string_length,
        ))),

        FakeType::Instant => Ok(FakeValue::Instant(timestamp::generate_near_now(
            &mut faker.rng,
        ))),

        FakeType::Pointer(inner) => {
            let pointee = match current {
                FakeValue::Pointer(value) => value.as_ref().clone(),
                _ => inner.zero_value(),
            };
            let value = generate(faker, inner, &pointee)?;
            Ok(FakeValue::pointer(value))
        }

        FakeType::Seq(element) => {
            let len = faker.collection_size();
            if len == 0 && faker.nil_if_len_zero {
                return Ok(FakeValue::Nil);
            }
            let zero = element.zero_value();
            let items = (0..len)
                .map(|_| generate(faker, element, &zero))
                .collect::<Result<Vec<_>>>()?;
            Ok(FakeValue::Seq(items))
        }

        FakeType::Array { element, len } => {
            if faker.collection_size() == 0 && faker.nil_if_len_zero {
                return Ok(ty.zero_value());
            }
            let current_items = current.as_seq().unwrap_or_default();
            let items = (0..*len)
                .map(|i| {
                    let item = current_items
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| element.zero_value());
                    generate(faker, element, &item)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(FakeValue::Seq(items))
        }

        FakeType::Map { key, value } => {
            let len = faker.collection_size();
            if len == 0 && faker.nil_if_len_zero {
                return Ok(FakeValue::Nil);
            }
            let zero_key = key.zero_value();
            let zero_value = value.zero_value();
            let mut entries = Vec::with_capacity(len);
            for _ in 0..len {
                let k = generate(faker, key, &zero_key)?;
                let v = generate(faker, value, &zero_value)?;
                entries.push((k, v));
            }
            Ok(FakeValue::Map(entries))
        }

        FakeType::Record(record) => record::generate_record(faker, record, current),

        FakeType::Unsupported(name) => Err(FakeError::UnsupportedKind((*name).to_string())),
    }
}

/// Narrow or widen a numeric value to the exact width of `ty`.
pub(crate) fn narrow(value: FakeValue, ty: &FakeType) -> Result<FakeValue> {
    value
        .cast_numeric(ty)
        .ok_or_else(|| FakeError::UnsupportedKind(ty.kind_name().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakegen_core::FakeType;

    #[test]
    fn test_scalars_follow_settings() {
        let mut faker = Faker::with_seed(42);
        faker.set_random_string_length(12).unwrap();
        faker.set_random_number_boundaries(-3, 3).unwrap();

        let s = generate(&mut faker, &FakeType::String, &FakeValue::Nil).unwrap();
        let s = s.as_str().unwrap();
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| c.is_ascii_alphabetic()));

        for _ in 0..200 {
            let FakeValue::I16(v) = generate(&mut faker, &FakeType::I16, &FakeValue::Nil).unwrap()
            else {
                panic!("expected i16");
            };
            assert!((-3..3).contains(&v));
        }
    }

    #[test]
    fn test_unsigned_keeps_width() {
        let mut faker = Faker::with_seed(42);
        let value = generate(&mut faker, &FakeType::U8, &FakeValue::Nil).unwrap();
        assert!(matches!(value, FakeValue::U8(v) if v < 100));
    }

    #[test]
    fn test_floats_in_unit_interval() {
        let mut faker = Faker::with_seed(42);
        for _ in 0..200 {
            let FakeValue::F64(v) = generate(&mut faker, &FakeType::F64, &FakeValue::Nil).unwrap()
            else {
                panic!("expected f64");
            };
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seq_size_policy() {
        let mut faker = Faker::with_seed(42);
        faker.set_random_map_and_slice_size(4).unwrap();
        let ty = FakeType::seq(FakeType::String);
        for _ in 0..50 {
            let value = generate(&mut faker, &ty, &FakeValue::Nil).unwrap();
            assert!(value.as_seq().unwrap().len() < 4);
        }

        faker.set_test_rand_zero(true);
        let value = generate(&mut faker, &ty, &FakeValue::Nil).unwrap();
        assert_eq!(value, FakeValue::Seq(Vec::new()));

        faker.set_nil_if_len_is_zero(true);
        let value = generate(&mut faker, &ty, &FakeValue::Nil).unwrap();
        assert!(value.is_nil());
    }

    #[test]
    fn test_map_size_policy() {
        let mut faker = Faker::with_seed(42);
        faker.set_test_rand_zero(true);
        let ty = FakeType::map(FakeType::String, FakeType::I32);

        assert_eq!(
            generate(&mut faker, &ty, &FakeValue::Nil).unwrap(),
            FakeValue::Map(Vec::new())
        );
        faker.set_nil_if_len_is_zero(true);
        assert!(generate(&mut faker, &ty, &FakeValue::Nil).unwrap().is_nil());
    }

    #[test]
    fn test_array_has_static_length() {
        let mut faker = Faker::with_seed(42);
        faker.set_test_rand_zero(true);
        let ty = FakeType::array(FakeType::I32, 3);

        let value = generate(&mut faker, &ty, &ty.zero_value()).unwrap();
        assert_eq!(value.as_seq().unwrap().len(), 3);

        faker.set_nil_if_len_is_zero(true);
        let value = generate(&mut faker, &ty, &ty.zero_value()).unwrap();
        assert_eq!(value, ty.zero_value());
    }

    #[test]
    fn test_pointer_wraps_generated_pointee() {
        let mut faker = Faker::with_seed(42);
        let ty = FakeType::pointer(FakeType::String);

        let value = generate(&mut faker, &ty, &FakeValue::Nil).unwrap();
        let FakeValue::Pointer(inner) = value else {
            panic!("expected pointer");
        };
        assert_eq!(inner.as_str().unwrap().len(), 25);
    }

    #[test]
    fn test_unsupported_kind() {
        let mut faker = Faker::with_seed(42);
        let err = generate(&mut faker, &FakeType::Unsupported("fn()"), &FakeValue::Nil)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported kind: fn()");

        let ty = FakeType::seq(FakeType::Unsupported("fn()"));
        faker.set_random_map_and_slice_size(5).unwrap();
        // An empty draw never reaches the element type, so retry until it does.
        let failed = (0..50).any(|_| generate(&mut faker, &ty, &FakeValue::Nil).is_err());
        assert!(failed);
    }
}
