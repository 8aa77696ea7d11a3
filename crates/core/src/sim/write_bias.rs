//! Simulated write activity.
//!
//! Decides whether an access sets the modified bit. No policy reads the bit;
//! it only makes the page table look like a live system. `Never` mode keeps
//! runs fully deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::ConfigError;
use crate::config::{ModifiedBitsConfig, ModifiedBitsMode};

/// Modified-bit generator.
#[derive(Debug, Clone)]
pub struct WriteBias {
    mode: ModifiedBitsMode,
    hit_probability: f64,
    load_probability: f64,
    rng: StdRng,
}

impl WriteBias {
    /// Creates a generator from configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::ProbabilityOutOfRange` if either probability lies outside `[0, 1]`.
    pub fn new(config: &ModifiedBitsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Ok(Self {
            mode: config.mode,
            hit_probability: config.hit_probability,
            load_probability: config.load_probability,
            rng,
        })
    }

    /// Whether a hit writes to the page.
    pub fn on_hit(&mut self) -> bool {
        self.roll(self.hit_probability)
    }

    /// Whether a freshly loaded page is written.
    pub fn on_load(&mut self) -> bool {
        self.roll(self.load_probability)
    }

    fn roll(&mut self, probability: f64) -> bool {
        match self.mode {
            ModifiedBitsMode::Never => false,
            ModifiedBitsMode::Random => self.rng.gen_bool(probability),
        }
    }
}
