//! UUID providers.

use crate::registry::ProviderResult;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;
use rand::Rng;
use uuid::{Builder, Uuid};

/// Build a version 4 UUID from the provided RNG.
fn random_uuid(rng: &mut StdRng) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

/// 32 lowercase hex digits without separators.
pub fn digit(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(random_uuid(rng).simple().to_string()))
}

/// Canonical 8-4-4-4-12 form.
pub fn hyphenated(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(random_uuid(rng).hyphenated().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn text(value: ProviderResult) -> String {
        value.unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_digit_form() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = text(digit(&FakeType::String, &mut rng));
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_hyphenated_form() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = text(hyphenated(&FakeType::String, &mut rng));
        let groups: Vec<usize> = id.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert_eq!(Uuid::parse_str(&id).unwrap().get_version_num(), 4);
    }

    #[test]
    fn test_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(
            hyphenated(&FakeType::String, &mut rng1).unwrap(),
            hyphenated(&FakeType::String, &mut rng2).unwrap()
        );
        assert_ne!(
            hyphenated(&FakeType::String, &mut rng1).unwrap(),
            hyphenated(&FakeType::String, &mut rng1).unwrap()
        );
    }
}
