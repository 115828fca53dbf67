//! Record (struct) generation.
//!
//! Fields are visited in declaration order. Each field takes exactly one
//! path:
//!
//! 1. unsettable or excluded: the current value is copied through
//! 2. `keep`: a non-zero current value is kept, a zero one is generated from
//!    the remaining tag
//! 3. untagged: generated from the field type
//! 4. `-`: left at the zero value
//! 5. any other tag: routed to tagged generation

use super::{generate, tagged};
use crate::error::{FakeError, Result};
use crate::generator::Faker;
use crate::tag::TagDirective;
use fakegen_core::{FakeRecord, FakeValue, FieldType, RecordType};
use tracing::debug;

/// Generate every field of `record`, reading prior values from `current`.
pub fn generate_record(
    faker: &mut Faker,
    record: &RecordType,
    current: &FakeValue,
) -> Result<FakeValue> {
    let current = current.as_record();
    let mut fields = Vec::with_capacity(record.fields.len());

    for (index, field) in record.fields.iter().enumerate() {
        let existing = current
            .and_then(|r| r.get(field.name))
            .cloned()
            .unwrap_or_else(|| field.ty.zero_value());

        if !field.settable {
            debug!("{}.{}: not settable, copied", record.name, field.name);
            fields.push((field.name.to_string(), existing));
            continue;
        }
        if faker.is_excluded(field.name) {
            debug!("{}.{}: excluded by filter", record.name, field.name);
            fields.push((field.name.to_string(), existing));
            continue;
        }

        let directive = TagDirective::decode(record, index, &faker.field_tags);
        let value = if directive.keep_original {
            keep_or_generate(faker, record, field, &directive, existing)?
        } else {
            generate_field(faker, record, field, &directive, &existing)?
        };
        fields.push((field.name.to_string(), value));
    }

    Ok(FakeValue::Record(FakeRecord::new(fields)))
}

fn keep_or_generate(
    faker: &mut Faker,
    record: &RecordType,
    field: &FieldType,
    directive: &TagDirective,
    existing: FakeValue,
) -> Result<FakeValue> {
    if field.ty.is_composite() {
        return Err(FakeError::KeepNotAllowed {
            field: field.name.to_string(),
            kind: field.ty.kind_name().to_string(),
        });
    }
    if existing != field.ty.zero_value() {
        debug!("{}.{}: keeping original value", record.name, field.name);
        return Ok(existing);
    }
    // A zero value under `keep` is regenerated through the field's own tag.
    if directive.is_untagged() {
        return Err(FakeError::TagNotSupported(directive.tag.clone()));
    }
    generate_field(faker, record, field, directive, &existing)
}

fn generate_field(
    faker: &mut Faker,
    record: &RecordType,
    field: &FieldType,
    directive: &TagDirective,
    existing: &FakeValue,
) -> Result<FakeValue> {
    if directive.is_untagged() {
        debug!("{}.{}: untagged", record.name, field.name);
        return generate(faker, &field.ty, existing);
    }
    if directive.is_skip() {
        debug!("{}.{}: skipped", record.name, field.name);
        return Ok(field.ty.zero_value());
    }
    debug!("{}.{}: tag '{}'", record.name, field.name, directive.tag);
    tagged::generate_tagged(faker, &directive.tag, &field.ty)
}
