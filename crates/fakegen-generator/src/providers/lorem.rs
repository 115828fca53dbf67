//! Placeholder text providers.

use crate::registry::ProviderResult;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::Fake;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;

pub fn word(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(Word().fake_with_rng(rng)))
}

pub fn sentence(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(Sentence(3..10).fake_with_rng(rng)))
}

pub fn paragraph(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(Paragraph(3..6).fake_with_rng(rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn text(value: ProviderResult) -> String {
        value.unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_word_is_single_token() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let word = text(word(&FakeType::String, &mut rng));
            assert!(!word.is_empty());
            assert!(!word.contains(' '));
        }
    }

    #[test]
    fn test_sentence_and_paragraph_have_words() {
        let mut rng = StdRng::seed_from_u64(42);
        let sentence = text(sentence(&FakeType::String, &mut rng));
        assert!(sentence.split_whitespace().count() >= 3);

        let paragraph = text(paragraph(&FakeType::String, &mut rng));
        assert!(paragraph.split_whitespace().count() >= 3);
    }

    #[test]
    fn test_seeded_output_repeats() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            sentence(&FakeType::String, &mut a).unwrap(),
            sentence(&FakeType::String, &mut b).unwrap()
        );
    }
}
