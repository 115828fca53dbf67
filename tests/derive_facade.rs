//! The derive macro used through the `fakegen` facade alone.

mod common;

use fakegen::{FakeType, Fakeable, Faker};

#[derive(Debug, Default, Fakeable)]
pub struct User {
    pub name: String,
    #[faker("boundary_start=1, boundary_end=10")]
    pub level: u8,
}

#[derive(Debug, Default, Fakeable)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[test]
fn test_derive_through_facade() {
    common::init_logging();

    let FakeType::Record(record) = User::fake_type() else {
        panic!("User is not a record");
    };
    assert_eq!(record.name, "User");
    assert_eq!(record.field_names(), vec!["name", "level"]);

    let mut faker = Faker::with_seed(42);
    let user: User = faker.fake().unwrap();
    assert_eq!(user.name.len(), 25);
    assert!((1..10).contains(&user.level));
}

#[test]
fn test_generic_derive_through_facade() {
    common::init_logging();

    let mut faker = Faker::with_seed(42);
    faker.set_random_map_and_slice_size(4).unwrap();

    let page: Page<User> = faker.fake().unwrap();
    assert!(page.items.len() < 4);
    assert!(page.items.iter().all(|user| (1..10).contains(&user.level)));
}
