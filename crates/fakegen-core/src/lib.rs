//! Core types for the fakegen fake data generator.
//!
//! This crate provides the closed value-kind universe the generation engine
//! works over:
//!
//! - [`FakeType`] - Type descriptor for every supported destination shape
//! - [`FakeValue`] - Generated value carrying the exact scalar width
//! - [`RecordType`] / [`FieldType`] - Field metadata for structs
//! - [`Fakeable`] - Bridge between Rust types and the universe
//!
//! # Architecture
//!
//! ```text
//! fakegen-core (this crate)
//!    │
//!    ├─── fakegen-derive     (emits Fakeable impls for structs)
//!    │
//!    └─── fakegen-generator  (walks FakeType, produces FakeValue)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakegen_core::{Fakeable, FakeType, FakeValue};
//!
//! assert_eq!(Vec::<u8>::fake_type(), FakeType::seq(FakeType::U8));
//!
//! let value = FakeValue::Seq(vec![FakeValue::U8(1), FakeValue::U8(2)]);
//! assert_eq!(Vec::<u8>::from_fake(value).unwrap(), vec![1, 2]);
//! ```

pub mod fakeable;
pub mod json;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use fakeable::Fakeable;
pub use types::{FakeType, FieldType, RecordType};
pub use values::{ConvertError, FakeRecord, FakeValue};
