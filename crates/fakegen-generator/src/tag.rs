//! Field tag decoding.
//!
//! A field's raw `#[faker("...")]` text is split on commas. The `keep`
//! marker becomes a flag, empty tokens are dropped, and a caller-registered
//! per-field-name override is appended. Tag semantics are not validated
//! here; unknown or malformed tags fail later, when the engine resolves them.

use fakegen_core::RecordType;
use std::collections::BTreeMap;

/// Marker that preserves a field's non-zero current value.
pub const KEEP: &str = "keep";

/// Marker that leaves a field at its zero value.
pub const SKIP: &str = "-";

/// Decoded directive for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDirective {
    /// Remaining tag tokens joined with commas
    pub tag: String,
    /// Whether `keep` was present
    pub keep_original: bool,
}

impl TagDirective {
    /// Decode raw tag text, appending `extra` when present.
    pub fn parse(raw: &str, extra: Option<&str>) -> Self {
        let mut keep_original = false;
        let mut tokens = Vec::new();

        for token in raw.split(',') {
            if token == KEEP {
                keep_original = true;
                continue;
            }
            if !token.is_empty() {
                tokens.push(token);
            }
        }
        if let Some(extra) = extra {
            tokens.push(extra);
        }

        Self {
            tag: tokens.join(","),
            keep_original,
        }
    }

    /// Decode the tag of field `index` of `record`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for `record.fields`.
    pub fn decode(
        record: &RecordType,
        index: usize,
        field_tags: &BTreeMap<String, String>,
    ) -> Self {
        let field = &record.fields[index];
        Self::parse(field.tag, field_tags.get(field.name).map(String::as_str))
    }

    /// Whether no tag applies to the field.
    pub fn is_untagged(&self) -> bool {
        self.tag.is_empty()
    }

    /// Whether the field carries the skip marker.
    pub fn is_skip(&self) -> bool {
        self.tag == SKIP
    }
}
