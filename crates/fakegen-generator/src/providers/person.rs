//! Person name providers.

use crate::random::random_element;
use crate::registry::{ProviderError, ProviderResult};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;

const TITLES_MALE: &[&str] = &["Mr.", "Dr.", "Prof.", "Lord", "King", "Prince"];

const TITLES_FEMALE: &[&str] = &[
    "Mrs.", "Ms.", "Miss", "Dr.", "Prof.", "Lady", "Queen", "Princess",
];

const FIRST_NAMES_MALE: &[&str] = &[
    "Aaron", "Adam", "Albert", "Andrew", "Arthur", "Benjamin", "Bruce", "Carl", "Charles",
    "Daniel", "David", "Dennis", "Edward", "Eric", "Frank", "George", "Gregory", "Harold",
    "Henry", "Jack", "James", "Jason", "John", "Joseph", "Kevin", "Larry", "Louis", "Mark",
    "Michael", "Nathan", "Patrick", "Paul", "Peter", "Raymond", "Richard", "Robert", "Roger",
    "Samuel", "Scott", "Stephen", "Thomas", "Timothy", "Walter", "William",
];

const FIRST_NAMES_FEMALE: &[&str] = &[
    "Alice", "Amanda", "Amy", "Angela", "Anna", "Barbara", "Betty", "Carol", "Catherine",
    "Christine", "Deborah", "Diana", "Donna", "Dorothy", "Elizabeth", "Emily", "Emma",
    "Evelyn", "Frances", "Grace", "Helen", "Jane", "Janet", "Jennifer", "Joan", "Julia",
    "Karen", "Laura", "Linda", "Margaret", "Maria", "Martha", "Mary", "Nancy", "Olivia",
    "Patricia", "Rachel", "Rose", "Ruth", "Sandra", "Sarah", "Susan", "Victoria",
];

pub fn title_male(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    pick(rng, TITLES_MALE)
}

pub fn title_female(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    pick(rng, TITLES_FEMALE)
}

pub fn first_name(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(FirstName().fake_with_rng(rng)))
}

pub fn first_name_male(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    pick(rng, FIRST_NAMES_MALE)
}

pub fn first_name_female(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    pick(rng, FIRST_NAMES_FEMALE)
}

pub fn last_name(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(LastName().fake_with_rng(rng)))
}

pub fn name(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(Name().fake_with_rng(rng)))
}

pub(crate) fn pick(rng: &mut StdRng, items: &[&str]) -> ProviderResult {
    random_element(rng, items)
        .map(|item| FakeValue::String((*item).to_string()))
        .ok_or_else(|| ProviderError::new("empty word list"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn text(value: ProviderResult) -> String {
        value.unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_titles_come_from_lists() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert!(TITLES_MALE.contains(&text(title_male(&FakeType::String, &mut rng)).as_str()));
            assert!(
                TITLES_FEMALE.contains(&text(title_female(&FakeType::String, &mut rng)).as_str())
            );
        }
    }

    #[test]
    fn test_gendered_first_names() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let male = text(first_name_male(&FakeType::String, &mut rng));
            assert!(FIRST_NAMES_MALE.contains(&male.as_str()));
            let female = text(first_name_female(&FakeType::String, &mut rng));
            assert!(FIRST_NAMES_FEMALE.contains(&female.as_str()));
        }
    }

    #[test]
    fn test_names_are_non_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(!text(first_name(&FakeType::String, &mut rng)).is_empty());
        assert!(!text(last_name(&FakeType::String, &mut rng)).is_empty());
        assert!(text(name(&FakeType::String, &mut rng)).contains(' '));
    }

    #[test]
    fn test_pick_empty_list() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(pick(&mut rng, &[]).is_err());
    }
}
