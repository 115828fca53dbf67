//! Geographic coordinate providers.

use crate::registry::ProviderResult;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;
use rand::Rng;

pub fn latitude(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::F32(rng.gen_range(-90.0..90.0)))
}

pub fn longitude(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::F32(rng.gen_range(-180.0..180.0)))
}
