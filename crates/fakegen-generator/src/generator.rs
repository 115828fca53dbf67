//! The generator instance.

use crate::config::{FakerConfig, DEFAULT_RANDOM_SIZE, DEFAULT_STRING_LENGTH};
use crate::error::{FakeError, Result};
use crate::generators;
use crate::random::{random_size, NumberBoundary};
use crate::registry::{Provider, ProviderRegistry, Receiver};
use fakegen_core::{FakeType, FakeValue, Fakeable};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Fills values of any [`Fakeable`] type with fake data.
///
/// Each instance owns its settings, its provider registry and its random
/// source, so independent instances never interfere. An instance built with
/// a seed produces the same values for the same sequence of calls.
///
/// ```rust
/// use fakegen_generator::Faker;
///
/// let mut faker = Faker::with_seed(42);
/// faker.set_random_string_length(8).unwrap();
///
/// let mut name = String::new();
/// faker.fake_data(&mut name).unwrap();
/// assert_eq!(name.len(), 8);
/// ```
#[derive(Debug)]
pub struct Faker {
    pub(crate) string_length: usize,
    pub(crate) random_size: usize,
    pub(crate) boundary: NumberBoundary,
    pub(crate) nil_if_len_zero: bool,
    pub(crate) test_rand_zero: bool,
    pub(crate) field_filters: Vec<Regex>,
    pub(crate) field_tags: BTreeMap<String, String>,
    pub(crate) registry: ProviderRegistry,
    pub(crate) rng: StdRng,
}

impl Faker {
    /// Create a generator with default settings and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a generator with default settings and a seeded RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            string_length: DEFAULT_STRING_LENGTH as usize,
            random_size: DEFAULT_RANDOM_SIZE as usize,
            boundary: NumberBoundary::default(),
            nil_if_len_zero: false,
            test_rand_zero: false,
            field_filters: Vec::new(),
            field_tags: BTreeMap::new(),
            registry: ProviderRegistry::with_defaults(),
            rng,
        }
    }

    /// Create a generator from a validated configuration.
    pub fn from_config(config: &FakerConfig) -> Result<Self> {
        config.validate()?;

        let mut faker = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        faker.set_random_string_length(config.random_string_length)?;
        faker.set_random_map_and_slice_size(config.random_size)?;
        faker.set_random_number_boundaries(config.number_boundary.start, config.number_boundary.end)?;
        faker.nil_if_len_zero = config.nil_if_len_zero;
        faker.test_rand_zero = config.test_rand_zero;
        faker.field_filters = config.compiled_filters()?;
        faker.field_tags = config.field_tags.clone();

        info!(
            "Built generator: seed={:?}, string_length={}, random_size={}, boundary=[{}, {}), {} field filters, {} field tags",
            config.seed,
            faker.string_length,
            faker.random_size,
            faker.boundary.start,
            faker.boundary.end,
            faker.field_filters.len(),
            faker.field_tags.len()
        );
        Ok(faker)
    }

    /// Load a configuration file and build a generator from it.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading generator config from {}", path.display());
        let config = FakerConfig::from_file(path)?;
        Self::from_config(&config)
    }

    /// Leave sequences and maps nil instead of empty when their random size
    /// is zero.
    pub fn set_nil_if_len_is_zero(&mut self, set_nil: bool) {
        self.nil_if_len_zero = set_nil;
    }

    /// Set the length of untagged random strings.
    pub fn set_random_string_length(&mut self, size: i64) -> Result<()> {
        self.string_length = non_negative(size)?;
        Ok(())
    }

    /// Set the exclusive upper bound of random sequence and map sizes.
    pub fn set_random_map_and_slice_size(&mut self, size: i64) -> Result<()> {
        self.random_size = non_negative(size)?;
        Ok(())
    }

    /// Set the range `[start, end)` of untagged random integers.
    pub fn set_random_number_boundaries(&mut self, start: i64, end: i64) -> Result<()> {
        self.boundary = NumberBoundary::new(start, end)?;
        Ok(())
    }

    /// Force every random sequence and map size to zero.
    pub fn set_test_rand_zero(&mut self, zero: bool) {
        self.test_rand_zero = zero;
    }

    /// Leave fields whose name matches `pattern` untouched.
    pub fn add_field_filter(&mut self, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|source| FakeError::InvalidFieldFilter {
            pattern: pattern.to_string(),
            source,
        })?;
        self.field_filters.push(regex);
        Ok(())
    }

    /// Append `tag` to the tag of every field named `field`.
    pub fn add_field_tag(&mut self, field: impl Into<String>, tag: impl Into<String>) {
        self.field_tags.insert(field.into(), tag.into());
    }

    /// Register a provider whose output is stored as the whole destination.
    pub fn add_provider<P>(&mut self, tag: impl Into<String>, provider: P) -> Result<()>
    where
        P: Provider + 'static,
    {
        self.registry.register(tag, provider)
    }

    /// Register a provider with an explicit receiver form.
    pub fn add_provider_with_receiver<P>(
        &mut self,
        tag: impl Into<String>,
        provider: P,
        receiver: Receiver,
    ) -> Result<()>
    where
        P: Provider + 'static,
    {
        self.registry.register_with_receiver(tag, provider, receiver)
    }

    /// The provider registry of this generator.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Fill `target` with fake data.
    ///
    /// Fields marked `keep` that already hold a non-zero value retain it.
    /// Zero-ness is judged against the type's zero value, so a field set to
    /// `0`, `false` or `""` on purpose counts as unset and is generated
    /// through its tag; a `keep` field with no other tag then fails with
    /// [`FakeError::TagNotSupported`]. Use `Option` when zero is meaningful.
    ///
    /// On error `target` is left unchanged.
    pub fn fake_data<T: Fakeable>(&mut self, target: &mut T) -> Result<()> {
        let value = generators::generate(self, &T::fake_type(), &target.to_fake())?;
        *target = T::from_fake(value)?;
        Ok(())
    }

    /// Build a new value of `T` filled with fake data.
    pub fn fake<T: Fakeable>(&mut self) -> Result<T> {
        let ty = T::fake_type();
        let value = generators::generate(self, &ty, &ty.zero_value())?;
        Ok(T::from_fake(value)?)
    }

    /// Generate a value for a type descriptor, starting from `current`.
    pub fn generate(&mut self, ty: &FakeType, current: &FakeValue) -> Result<FakeValue> {
        generators::generate(self, ty, current)
    }

    /// Number of elements for the next random sequence or map.
    pub(crate) fn collection_size(&mut self) -> usize {
        if self.test_rand_zero {
            return 0;
        }
        random_size(&mut self.rng, self.random_size)
    }

    /// Whether a field name matches any exclusion filter.
    pub(crate) fn is_excluded(&self, field: &str) -> bool {
        self.field_filters.iter().any(|re| re.is_match(field))
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(size: i64) -> Result<usize> {
    usize::try_from(size).map_err(|_| FakeError::NegativeSize(size))
}
