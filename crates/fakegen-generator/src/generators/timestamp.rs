//! Instant generation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Generate an instant at or after the current moment.
///
/// The offset is a random number of nanoseconds in `[0, i64::MAX)`, roughly
/// up to 292 years ahead. This is the one generator that is not reproducible
/// from a seed, since it is anchored to the wall clock.
pub fn generate_near_now<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    let now = Utc::now();
    let offset = Duration::nanoseconds(rng.gen_range(0..i64::MAX));
    now.checked_add_signed(offset).unwrap_or(now)
}
