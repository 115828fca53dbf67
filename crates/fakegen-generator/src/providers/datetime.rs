//! Calendar and clock providers.
//!
//! Every provider draws a random instant between the Unix epoch and now and
//! renders one facet of it.

use super::person::pick;
use crate::registry::{ProviderError, ProviderResult};
use chrono::{DateTime, Utc};
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;
use rand::Rng;

const CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

const TIMEZONES: &[&str] = &[
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Mexico_City",
    "America/New_York",
    "America/Sao_Paulo",
    "America/Toronto",
    "Asia/Dubai",
    "Asia/Hong_Kong",
    "Asia/Jakarta",
    "Asia/Kolkata",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Tokyo",
    "Australia/Melbourne",
    "Australia/Sydney",
    "Europe/Amsterdam",
    "Europe/Berlin",
    "Europe/Istanbul",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Moscow",
    "Europe/Paris",
    "Europe/Rome",
    "Pacific/Auckland",
    "Pacific/Honolulu",
];

/// Seconds since the epoch, in `[0, now)`.
fn random_unix_seconds(rng: &mut StdRng) -> i64 {
    let now = Utc::now().timestamp();
    if now <= 0 {
        return 0;
    }
    rng.gen_range(0..now)
}

fn random_datetime(rng: &mut StdRng) -> Result<DateTime<Utc>, ProviderError> {
    let secs = random_unix_seconds(rng);
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ProviderError::new(format!("timestamp {secs} is out of range")))
}

fn formatted(rng: &mut StdRng, format: &str) -> ProviderResult {
    let datetime = random_datetime(rng)?;
    Ok(FakeValue::String(datetime.format(format).to_string()))
}

pub fn unix_time(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::I64(random_unix_seconds(rng)))
}

pub fn date(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%Y-%m-%d")
}

pub fn time(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%H:%M:%S")
}

pub fn month_name(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%B")
}

pub fn year(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%Y")
}

pub fn day_of_week(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%A")
}

pub fn day_of_month(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%d")
}

pub fn timestamp(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%Y-%m-%d %H:%M:%S")
}

pub fn century(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    pick(rng, CENTURIES)
}

pub fn timezone(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    pick(rng, TIMEZONES)
}

pub fn time_period(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    formatted(rng, "%p")
}
