//! Type-directed fake data generation.
//!
//! A [`Faker`] fills any [`Fakeable`](fakegen_core::Fakeable) value with
//! random data. Structs describe their fields through
//! `#[derive(Fakeable)]`; each field is generated from its type unless a
//! `#[faker("...")]` tag routes it elsewhere.
//!
//! # Architecture
//!
//! ```text
//! #[derive(Fakeable)] struct
//!        │  fake_type() / to_fake()
//!        ▼
//! ┌──────────────────────┐      ┌──────────────────┐
//! │        Faker         │─────▶│ ProviderRegistry │
//! │                      │      └──────────────────┘
//! │  - settings          │
//! │  - field filters     │      ┌──────────────────┐
//! │  - field tags        │─────▶│ TagDirective /   │
//! │  - rng (StdRng)      │      │ inline params    │
//! └──────────┬───────────┘      └──────────────────┘
//!            │  FakeValue
//!            ▼
//!     from_fake() back into the struct
//! ```
//!
//! # Tags
//!
//! - `#[faker("email")]`: use the provider registered as `email`
//! - `#[faker("len=10")]`: random string of 10 letters
//! - `#[faker("boundary_start=18, boundary_end=65")]`: integer in `[18, 65)`
//! - `#[faker("name,keep")]`: keep a non-zero current value
//! - `#[faker("-")]`: leave the field at its zero value
//!
//! Sequences and maps under a tag apply it to every element, key and value.

pub mod config;
pub mod error;
pub mod generator;
pub mod generators;
pub mod params;
pub mod providers;
pub mod random;
pub mod registry;
pub mod tag;

pub use config::{ConfigError, FakerConfig};
pub use error::{FakeError, Result};
pub use generator::Faker;
pub use random::NumberBoundary;
pub use registry::{
    provider_fn, Provider, ProviderEntry, ProviderError, ProviderRegistry, ProviderResult,
    Receiver,
};
pub use tag::TagDirective;
