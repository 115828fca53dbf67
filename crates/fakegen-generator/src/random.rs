//! Random primitives shared by the engine and the providers.

use crate::error::{FakeError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet for random strings.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphabet for random digit strings.
pub const DIGITS: &[u8] = b"0123456789";

/// Half-open integer range `[start, end)` for random integer generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberBoundary {
    /// Inclusive lower bound
    pub start: i64,
    /// Exclusive upper bound
    pub end: i64,
}

impl NumberBoundary {
    /// Create a boundary, rejecting `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(FakeError::StartBiggerThanEnd { start, end });
        }
        Ok(Self { start, end })
    }
}

impl Default for NumberBoundary {
    fn default() -> Self {
        Self { start: 0, end: 100 }
    }
}

/// Generate a string of exactly `n` ASCII letters.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    random_from_alphabet(rng, LETTERS, n)
}

/// Generate a string of exactly `n` decimal digits.
pub fn random_string_number<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    random_from_alphabet(rng, DIGITS, n)
}

fn random_from_alphabet<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], n: usize) -> String {
    (0..n)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Generate an integer in `[boundary.start, boundary.end)`.
///
/// An empty boundary (`start == end`) yields `start`.
pub fn random_integer<R: Rng + ?Sized>(rng: &mut R, boundary: NumberBoundary) -> i64 {
    if boundary.start >= boundary.end {
        return boundary.start;
    }
    rng.gen_range(boundary.start..boundary.end)
}

/// Generate a collection size in `[0, max)`; `max == 0` yields 0.
pub fn random_size<R: Rng + ?Sized>(rng: &mut R, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    rng.gen_range(0..max)
}

/// Pick one element of `items`, or `None` when it is empty.
pub fn random_element<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Every integer in `[min, max]` exactly once, in random order.
pub fn random_permutation<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<Vec<i64>> {
    if min > max {
        return Err(FakeError::StartBiggerThanEnd {
            start: min,
            end: max,
        });
    }
    let mut values: Vec<i64> = (min..=max).collect();
    values.shuffle(rng);
    Ok(values)
}
