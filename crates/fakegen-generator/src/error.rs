//! Error types for the generation engine.

use crate::config::ConfigError;
use crate::params::ParamError;
use crate::registry::ProviderError;
use fakegen_core::ConvertError;
use thiserror::Error;

/// Result alias for generation operations.
pub type Result<T> = std::result::Result<T, FakeError>;

/// Errors that can occur while configuring a generator or generating data.
#[derive(Error, Debug)]
pub enum FakeError {
    // Usage errors
    /// A size setting was negative.
    #[error("Size:{0} is smaller than zero.")]
    NegativeSize(i64),

    /// A numeric boundary had its start after its end.
    #[error("Start value can not be bigger than end value.")]
    StartBiggerThanEnd { start: i64, end: i64 },

    /// A field exclusion pattern is not a valid regular expression.
    #[error("Invalid field filter '{pattern}': {source}")]
    InvalidFieldFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Shape errors
    /// The destination has a kind with no generation rule.
    #[error("Unsupported kind: {0}")]
    UnsupportedKind(String),

    /// `keep` was requested on a struct, sequence, array or map field.
    #[error("keep not allowed on {kind} field '{field}'")]
    KeepNotAllowed { field: String, kind: String },

    // Tag errors
    /// No provider or inline parameter matches the tag.
    #[error("Tag unsupported: {0}")]
    TagNotSupported(String),

    /// Inline parameter text is malformed.
    #[error("Tag \"{0}\" is not written properly")]
    WrongFormattedTag(String),

    /// Inline parameter payload is not an integer.
    #[error("Tag \"{tag}\" has an invalid number: {source}")]
    InvalidInlineNumber {
        tag: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A tagged collection has an element type the tag cannot produce.
    #[error("Unknown Type: {0}")]
    UnknownType(String),

    /// The destination kind cannot be produced by the tag's inline form.
    #[error("Type is not supported by tag: {kind} under \"{tag}\"")]
    NotSupportedTypeForTag { tag: String, kind: String },

    // Registry errors
    /// A provider is already registered under the tag.
    #[error("Tag exists: {0}")]
    TagAlreadyExists(String),

    /// A provider failed.
    #[error("Provider '{tag}' failed: {source}")]
    Provider {
        tag: String,
        #[source]
        source: ProviderError,
    },

    /// A generated value does not fit the destination type.
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Configuration could not be loaded or is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<ParamError> for FakeError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::MissingKeyword(tag) => FakeError::TagNotSupported(tag),
            ParamError::WrongFormat(tag) => FakeError::WrongFormattedTag(tag),
            ParamError::InvalidNumber { tag, source } => {
                FakeError::InvalidInlineNumber { tag, source }
            }
            ParamError::InvertedBoundary { start, end } => {
                FakeError::StartBiggerThanEnd { start, end }
            }
        }
    }
}
