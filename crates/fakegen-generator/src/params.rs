//! Inline parameter parsing for tag text.
//!
//! Two forms are recognised, each scoped to a single tag:
//!
//! - length: `len=<n>` sizes a random string
//! - boundary: `boundary_start=<a>,boundary_end=<b>` bounds a random integer
//!   to `[a, b)`
//!
//! Parsing is independent of which provider or destination consumes the
//! result.

use crate::random::NumberBoundary;
use thiserror::Error;

/// Length keyword.
pub const LENGTH: &str = "len";
/// Boundary start keyword.
pub const BOUNDARY_START: &str = "boundary_start";
/// Boundary end keyword.
pub const BOUNDARY_END: &str = "boundary_end";
/// Separator between a keyword and its value.
pub const EQUALS: char = '=';
/// Separator between the two halves of a boundary.
pub const COMMA: char = ',';

/// Errors from inline parameter parsing.
#[derive(Error, Debug)]
pub enum ParamError {
    /// The tag does not carry the keyword of the requested form.
    #[error("Tag \"{0}\" has no inline parameter")]
    MissingKeyword(String),

    /// The tag carries the keyword but is not `keyword=<integer>` shaped.
    #[error("Tag \"{0}\" is not written properly")]
    WrongFormat(String),

    /// The payload after `=` is not an integer.
    #[error("Tag \"{tag}\" has an invalid number: {source}")]
    InvalidNumber {
        tag: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// `boundary_start` is greater than `boundary_end`.
    #[error("Boundary start {start} is bigger than end {end}")]
    InvertedBoundary { start: i64, end: i64 },
}

/// A parsed inline parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineParam {
    /// Random string length
    Length(usize),
    /// Random integer boundary
    Boundary(NumberBoundary),
}

/// Parse whichever inline form the tag carries.
pub fn parse_inline(tag: &str) -> Result<InlineParam, ParamError> {
    if is_boundary_form(tag) {
        parse_boundary(tag).map(InlineParam::Boundary)
    } else {
        parse_length(tag).map(InlineParam::Length)
    }
}

/// Parse a `len=<n>` tag.
pub fn parse_length(tag: &str) -> Result<usize, ParamError> {
    if !tag.contains(LENGTH) {
        return Err(ParamError::MissingKeyword(tag.to_string()));
    }
    let payload = split_key_value(tag, LENGTH)?;
    payload.parse().map_err(|source| ParamError::InvalidNumber {
        tag: tag.trim().to_string(),
        source,
    })
}

/// Parse a `boundary_start=<a>,boundary_end=<b>` tag.
pub fn parse_boundary(tag: &str) -> Result<NumberBoundary, ParamError> {
    if !is_boundary_form(tag) {
        return Err(ParamError::MissingKeyword(tag.to_string()));
    }

    let halves: Vec<&str> = tag.split(COMMA).collect();
    let [start_text, end_text] = halves.as_slice() else {
        return Err(ParamError::WrongFormat(tag.to_string()));
    };

    let start = parse_integer(start_text, BOUNDARY_START)?;
    let end = parse_integer(end_text, BOUNDARY_END)?;
    if start > end {
        return Err(ParamError::InvertedBoundary { start, end });
    }
    Ok(NumberBoundary { start, end })
}

fn is_boundary_form(tag: &str) -> bool {
    tag.contains(BOUNDARY_START) || tag.contains(BOUNDARY_END)
}

fn parse_integer(text: &str, keyword: &str) -> Result<i64, ParamError> {
    let payload = split_key_value(text, keyword)?;
    payload.parse().map_err(|source| ParamError::InvalidNumber {
        tag: text.trim().to_string(),
        source,
    })
}

/// Split `keyword=value`, returning the trimmed value.
fn split_key_value<'a>(text: &'a str, keyword: &str) -> Result<&'a str, ParamError> {
    let text = text.trim();
    let parts: Vec<&str> = text.split(EQUALS).collect();
    match parts.as_slice() {
        [key, value] if key.trim() == keyword => Ok(value.trim()),
        _ => Err(ParamError::WrongFormat(text.to_string())),
    }
}
