//! Generation for fields that carry a tag.
//!
//! Strings and numbers consult the provider registry first and fall back to
//! the inline parameter forms (`len=`, `boundary_start=,boundary_end=`).
//! Sequences, arrays and maps are never resolved as a whole; every element,
//! key and value is generated with the same tag. Pointers and every other
//! kind require a registered provider.

use super::narrow;
use crate::error::{FakeError, Result};
use crate::generator::Faker;
use crate::params::{parse_boundary, parse_length};
use crate::random::{random_integer, random_string};
use crate::registry::{ProviderEntry, Receiver};
use fakegen_core::{FakeType, FakeValue};
use tracing::warn;

/// Generate a value of type `ty` for a field tagged `tag`.
pub fn generate_tagged(faker: &mut Faker, tag: &str, ty: &FakeType) -> Result<FakeValue> {
    match ty {
        FakeType::Pointer(inner) => tagged_pointer(faker, tag, ty, inner),
        FakeType::String => tagged_string(faker, tag),
        _ if ty.is_numeric() => tagged_number(faker, tag, ty),

        FakeType::Seq(element) => {
            let len = faker.collection_size();
            if len == 0 && faker.nil_if_len_zero {
                return Ok(FakeValue::Nil);
            }
            let items = (0..len)
                .map(|_| tagged_member(faker, tag, element))
                .collect::<Result<Vec<_>>>()?;
            Ok(FakeValue::Seq(items))
        }

        FakeType::Array { element, len } => {
            if faker.collection_size() == 0 && faker.nil_if_len_zero {
                return Ok(ty.zero_value());
            }
            let items = (0..*len)
                .map(|_| tagged_member(faker, tag, element))
                .collect::<Result<Vec<_>>>()?;
            Ok(FakeValue::Seq(items))
        }

        FakeType::Map { key, value } => {
            let len = faker.collection_size();
            if len == 0 && faker.nil_if_len_zero {
                return Ok(FakeValue::Nil);
            }
            let mut entries = Vec::with_capacity(len);
            for _ in 0..len {
                let k = tagged_member(faker, tag, key)?;
                let v = tagged_member(faker, tag, value)?;
                entries.push((k, v));
            }
            Ok(FakeValue::Map(entries))
        }

        _ => {
            let entry = resolve(faker, tag)?;
            call_provider(faker, tag, &entry, ty)
        }
    }
}

/// Element, key or value of a tagged container.
fn tagged_member(faker: &mut Faker, tag: &str, ty: &FakeType) -> Result<FakeValue> {
    match ty {
        FakeType::String => tagged_string(faker, tag),
        _ if ty.is_numeric() => tagged_number(faker, tag, ty),
        other => Err(FakeError::UnknownType(other.kind_name().to_string())),
    }
}

fn tagged_pointer(
    faker: &mut Faker,
    tag: &str,
    ty: &FakeType,
    inner: &FakeType,
) -> Result<FakeValue> {
    let entry = resolve(faker, tag)?;
    match entry.receiver {
        Receiver::Whole => call_provider(faker, tag, &entry, ty),
        Receiver::Pointee => {
            let pointee = generate_tagged(faker, tag, inner)?;
            Ok(FakeValue::pointer(pointee))
        }
    }
}

fn tagged_string(faker: &mut Faker, tag: &str) -> Result<FakeValue> {
    let Some(entry) = faker.registry.resolve(tag).cloned() else {
        let len = parse_length(tag)?;
        return Ok(FakeValue::String(random_string(&mut faker.rng, len)));
    };

    match call_provider(faker, tag, &entry, &FakeType::String)? {
        FakeValue::String(s) => Ok(FakeValue::String(s)),
        FakeValue::Nil => Err(FakeError::TagNotSupported(tag.to_string())),
        other => {
            warn!(
                "Provider '{}' returned {} for a string destination, storing an empty string",
                tag,
                other.kind_name()
            );
            Ok(FakeValue::String(String::new()))
        }
    }
}

fn tagged_number(faker: &mut Faker, tag: &str, ty: &FakeType) -> Result<FakeValue> {
    if let Some(entry) = faker.registry.resolve(tag).cloned() {
        let value = call_provider(faker, tag, &entry, ty)?;
        return match value.cast_numeric(ty) {
            Some(number) => Ok(number),
            None => {
                warn!(
                    "Provider '{}' returned {} for a {} destination, storing zero",
                    tag,
                    value.kind_name(),
                    ty.kind_name()
                );
                Ok(ty.zero_value())
            }
        };
    }

    let boundary = parse_boundary(tag)?;
    if ty.is_float() {
        return Err(FakeError::NotSupportedTypeForTag {
            tag: tag.to_string(),
            kind: ty.kind_name().to_string(),
        });
    }
    narrow(
        FakeValue::I64(random_integer(&mut faker.rng, boundary)),
        ty,
    )
}

fn resolve(faker: &Faker, tag: &str) -> Result<ProviderEntry> {
    faker
        .registry
        .resolve(tag)
        .cloned()
        .ok_or_else(|| FakeError::TagNotSupported(tag.to_string()))
}

fn call_provider(
    faker: &mut Faker,
    tag: &str,
    entry: &ProviderEntry,
    ty: &FakeType,
) -> Result<FakeValue> {
    entry
        .provider
        .provide(ty, &mut faker.rng)
        .map_err(|source| FakeError::Provider {
            tag: tag.to_string(),
            source,
        })
}
