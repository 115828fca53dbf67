//! fakegen
//!
//! Fill Rust structs with fake data. The shape of a value comes from its type
//! (through `#[derive(Fakeable)]`); per-field `#[faker("...")]` tags select a
//! named provider, constrain a string length or integer range, keep an
//! existing value, or skip the field.
//!
//! # Crates
//!
//! - `fakegen_core` - the value universe (`FakeType`, `FakeValue`) and the
//!   `Fakeable` trait
//! - `fakegen_derive` - `#[derive(Fakeable)]`
//! - `fakegen_generator` - the `Faker` engine, providers and configuration
//!
//! Depending on this crate alone is enough: the derive macro reaches the core
//! crate through a hidden re-export.
//!
//! # Example
//!
//! ```rust
//! use fakegen::prelude::*;
//!
//! #[derive(Debug, Default, Fakeable)]
//! struct User {
//!     pub name: String,
//!     #[faker("boundary_start=18, boundary_end=65")]
//!     pub age: i32,
//!     #[faker("email")]
//!     pub email: String,
//!     pub tags: Vec<String>,
//! }
//!
//! let mut faker = Faker::with_seed(42);
//! let mut user = User::default();
//! faker.fake_data(&mut user).unwrap();
//!
//! assert_eq!(user.name.len(), 25);
//! assert!((18..65).contains(&user.age));
//! assert!(user.email.contains('@'));
//! ```

pub use fakegen_core::Fakeable;
pub use fakegen_derive::Fakeable;

#[doc(hidden)]
pub use fakegen_core as __core;

pub use fakegen_core::{FakeRecord, FakeType, FakeValue, FieldType, RecordType};
pub use fakegen_generator::providers::tags;
pub use fakegen_generator::{
    provider_fn, FakeError, Faker, FakerConfig, NumberBoundary, Provider, ProviderError,
    ProviderRegistry, ProviderResult, Receiver, Result,
};

/// Render a fakeable value as JSON.
pub fn to_json<T: fakegen_core::Fakeable>(value: &T) -> serde_json::Value {
    serde_json::Value::from(value.to_fake())
}

/// Generate `count` values of `T` with one generator.
pub fn fake_many<T: fakegen_core::Fakeable>(faker: &mut Faker, count: usize) -> Result<Vec<T>> {
    tracing::debug!("Generating {} values", count);
    (0..count).map(|_| faker.fake()).collect()
}

/// Common imports.
pub mod prelude {
    pub use crate::Fakeable;
    pub use fakegen_core::{FakeType, FakeValue};
    pub use fakegen_generator::{provider_fn, FakeError, Faker, FakerConfig, Receiver};
}
