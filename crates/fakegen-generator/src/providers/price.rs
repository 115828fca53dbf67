//! Currency and amount providers.

use crate::registry::ProviderResult;
use fake::faker::currency::en::CurrencyCode;
use fake::Fake;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;
use rand::Rng;

const MAX_AMOUNT: f64 = 10_000.0;

fn random_amount(rng: &mut StdRng) -> f64 {
    let raw: f64 = rng.gen_range(0.0..MAX_AMOUNT);
    (raw * 100.0).floor() / 100.0
}

pub fn currency(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(CurrencyCode().fake_with_rng(rng)))
}

pub fn amount(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::F64(random_amount(rng)))
}

pub fn amount_with_currency(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    let code: String = CurrencyCode().fake_with_rng(rng);
    let amount = random_amount(rng);
    Ok(FakeValue::String(format!("{code} {amount:.2}")))
}
