//! Provider registry.
//!
//! Maps tag names to providers. Each generator owns its own registry,
//! seeded with the default domain providers; callers extend it at runtime.
//! A name can be registered once; duplicates are rejected and leave the
//! registry unchanged.

use crate::error::{FakeError, Result};
use crate::providers;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Failure reported by a provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    /// Create a provider error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type returned by providers.
pub type ProviderResult = std::result::Result<FakeValue, ProviderError>;

/// A named source of domain-specific fake values.
///
/// `example` describes the destination the value is generated for; it tells
/// the provider what to produce and is never used as a seed. All randomness
/// must come from `rng` so seeded generators stay reproducible.
pub trait Provider: Send + Sync {
    /// Produce a value for a destination shaped like `example`.
    fn provide(&self, example: &FakeType, rng: &mut StdRng) -> ProviderResult;
}

impl<F> Provider for F
where
    F: Fn(&FakeType, &mut StdRng) -> ProviderResult + Send + Sync,
{
    fn provide(&self, example: &FakeType, rng: &mut StdRng) -> ProviderResult {
        self(example, rng)
    }
}

/// Pin a closure to the provider signature so its argument types infer.
///
/// ```rust
/// use fakegen_core::FakeValue;
/// use fakegen_generator::registry::provider_fn;
///
/// let provider = provider_fn(|_, _| Ok(FakeValue::I64(43)));
/// ```
pub fn provider_fn<F>(f: F) -> F
where
    F: Fn(&FakeType, &mut StdRng) -> ProviderResult + Send + Sync,
{
    f
}

/// How a provider relates to pointer destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// The provider writes the pointed-to value. For a pointer destination
    /// the engine generates the pointee through the provider and allocates
    /// the pointer itself.
    Pointee,
    /// The provider produces the destination value as is, pointer included.
    Whole,
}

/// A registered provider and its receiver form.
#[derive(Clone)]
pub struct ProviderEntry {
    /// The provider
    pub provider: Arc<dyn Provider>,
    /// How pointer destinations are handled
    pub receiver: Receiver,
}

impl fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("receiver", &self.receiver)
            .finish_non_exhaustive()
    }
}

/// Tag name to provider mapping.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    entries: HashMap<String, ProviderEntry>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every default provider.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, provider) in providers::defaults() {
            registry.entries.insert(
                name.to_string(),
                ProviderEntry {
                    provider,
                    receiver: Receiver::Pointee,
                },
            );
        }
        registry
    }

    /// Register a provider that produces whole destination values.
    pub fn register<P>(&mut self, name: impl Into<String>, provider: P) -> Result<()>
    where
        P: Provider + 'static,
    {
        self.register_with_receiver(name, provider, Receiver::Whole)
    }

    /// Register a provider with an explicit receiver form.
    pub fn register_with_receiver<P>(
        &mut self,
        name: impl Into<String>,
        provider: P,
        receiver: Receiver,
    ) -> Result<()>
    where
        P: Provider + 'static,
    {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(FakeError::TagAlreadyExists(name));
        }

        debug!("Registering provider '{}' ({:?})", name, receiver);
        self.entries.insert(
            name,
            ProviderEntry {
                provider: Arc::new(provider),
                receiver,
            },
        );
        Ok(())
    }

    /// Look up the provider registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&ProviderEntry> {
        self.entries.get(name)
    }

    /// Whether a provider is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
