//! Telephone number providers.

use crate::random::{random_element, random_string_number};
use crate::registry::ProviderResult;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;
use rand::Rng;

const TOLL_FREE_PREFIXES: &[&str] = &["800", "833", "844", "855", "866", "877", "888"];

pub fn phone_number(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(PhoneNumber().fake_with_rng(rng)))
}

pub fn toll_free_number(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    let prefix = random_element(rng, TOLL_FREE_PREFIXES)
        .copied()
        .unwrap_or("800");
    let exchange = random_string_number(rng, 3);
    let line = random_string_number(rng, 4);
    Ok(FakeValue::String(format!("({prefix}) {exchange}-{line}")))
}

pub fn e164_phone_number(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    let lead: u8 = rng.gen_range(2..10);
    let rest = random_string_number(rng, 9);
    Ok(FakeValue::String(format!("+1{lead}{rest}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn text(value: ProviderResult) -> String {
        value.unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_phone_number_has_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let number = text(phone_number(&FakeType::String, &mut rng));
        assert!(number.chars().filter(char::is_ascii_digit).count() >= 7);
    }

    #[test]
    fn test_toll_free_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let number = text(toll_free_number(&FakeType::String, &mut rng));
            assert_eq!(number.len(), "(800) 555-0100".len());
            assert!(TOLL_FREE_PREFIXES.contains(&&number[1..4]));
        }
    }

    #[test]
    fn test_e164_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let number = text(e164_phone_number(&FakeType::String, &mut rng));
            assert!(number.starts_with("+1"));
            assert_eq!(number.len(), 12);
            assert!(number[2..].chars().all(|c| c.is_ascii_digit()));
            assert_ne!(&number[2..3], "0");
            assert_ne!(&number[2..3], "1");
        }
    }
}
