//! Conversion of generated values into JSON.
//!
//! Useful for dumping generated fixtures or printing them in demos.

use crate::values::FakeValue;
use serde_json::{json, Map, Value};

impl From<FakeValue> for Value {
    fn from(value: FakeValue) -> Self {
        match value {
            FakeValue::Nil => Value::Null,
            FakeValue::Bool(b) => json!(b),
            FakeValue::I8(i) => json!(i),
            FakeValue::I16(i) => json!(i),
            FakeValue::I32(i) => json!(i),
            FakeValue::I64(i) => json!(i),
            FakeValue::Isize(i) => json!(i),
            FakeValue::U8(u) => json!(u),
            FakeValue::U16(u) => json!(u),
            FakeValue::U32(u) => json!(u),
            FakeValue::U64(u) => json!(u),
            FakeValue::Usize(u) => json!(u),
            FakeValue::F32(f) => json!(f),
            FakeValue::F64(f) => json!(f),
            FakeValue::String(s) => Value::String(s),

            // Date/time - RFC 3339
            FakeValue::Instant(dt) => Value::String(dt.to_rfc3339()),

            FakeValue::Pointer(inner) => Value::from(*inner),
            FakeValue::Seq(items) => Value::Array(items.into_iter().map(Value::from).collect()),

            // JSON object keys must be strings
            FakeValue::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (map_key(k), Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
            FakeValue::Record(record) => Value::Object(
                record
                    .into_iter()
                    .map(|(name, v)| (name, Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

fn map_key(key: FakeValue) -> String {
    match Value::from(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
