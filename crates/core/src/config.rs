//! Configuration system for the page replacement simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The classic teaching setup (4 frames, the Belady reference string, FIFO).
//! 2. **Structures:** Run configuration plus write-bias, auto-run and generator settings.
//! 3. **Enums:** Replacement policy and modified-bit simulation mode.
//!
//! Configuration is supplied as JSON (`SimConfig::from_json`) or built with `SimConfig::default()`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{ConfigError, PageNumber};

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of physical frames.
    pub const FRAMES: usize = 4;

    /// Reference string shown on first start.
    ///
    /// This is Belady's sequence: FIFO faults more often with 4 frames than with 3.
    pub const REFERENCE: &[u32] = &[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    /// Chance that a hit writes to the page.
    pub const HIT_WRITE_PROBABILITY: f64 = 0.3;

    /// Chance that a freshly loaded page is written immediately.
    pub const LOAD_WRITE_PROBABILITY: f64 = 0.2;

    /// Delay between auto-run steps in milliseconds.
    pub const STEP_INTERVAL_MS: u64 = 150;

    /// Length of a generated reference string.
    pub const GENERATED_LENGTH: usize = 20;
}

/// Largest reference string the generator will produce.
pub const MAX_GENERATED_LENGTH: usize = 100;

/// Page replacement policy.
///
/// Selects which resident page is evicted when a fault occurs with every frame occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First In First Out.
    ///
    /// Evicts the page that has been resident longest.
    #[default]
    #[serde(alias = "Fifo", alias = "fifo")]
    Fifo,
    /// Least Recently Used.
    ///
    /// Evicts the page whose last access lies furthest in the past.
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
    /// Optimal (Belady's MIN).
    ///
    /// Evicts the page whose next access lies furthest in the future, or never comes.
    #[serde(alias = "Opt", alias = "opt", alias = "OPTIMAL")]
    Opt,
}

impl PolicyKind {
    /// Every policy, in display order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Opt];

    /// Short upper-case name used in logs and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Opt => "OPT",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Self::Fifo),
            "LRU" => Ok(Self::Lru),
            "OPT" | "OPTIMAL" => Ok(Self::Opt),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// How the simulated modified (dirty) bit is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ModifiedBitsMode {
    /// Set the bit at random with the configured probabilities.
    #[default]
    Random,
    /// Never set the bit; runs are fully deterministic.
    Never,
}

/// Root configuration for a simulation run.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{PolicyKind, SimConfig};
///
/// let json = r#"{
///     "frames": 3,
///     "reference": [7, 0, 1, 2, 0, 3],
///     "policy": "LRU",
///     "modified_bits": { "mode": "Never" }
/// }"#;
///
/// let config = SimConfig::from_json(json).unwrap();
/// assert_eq!(config.frames, 3);
/// assert_eq!(config.policy, PolicyKind::Lru);
/// assert_eq!(config.auto_run.interval_ms, 150);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of physical frames
    #[serde(default = "SimConfig::default_frames")]
    pub frames: usize,

    /// Page reference string
    #[serde(default = "SimConfig::default_reference")]
    pub reference: Vec<PageNumber>,

    /// Replacement policy
    #[serde(default)]
    pub policy: PolicyKind,

    /// Modified-bit simulation
    #[serde(default)]
    pub modified_bits: ModifiedBitsConfig,

    /// Auto-run pacing
    #[serde(default)]
    pub auto_run: AutoRunConfig,

    /// Random reference string generation
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl SimConfig {
    /// Returns the default frame count.
    fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Returns the default reference string.
    fn default_reference() -> Vec<PageNumber> {
        PageNumber::sequence(defaults::REFERENCE)
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Arguments
    ///
    /// * `json` - Configuration document; missing fields take their defaults.
    ///
    /// # Returns
    ///
    /// The validated configuration, or `ConfigError::Parse` / a validation error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a runnable simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames == 0 {
            return Err(ConfigError::ZeroFrames(self.frames));
        }
        self.modified_bits.validate()
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: defaults::FRAMES,
            reference: Self::default_reference(),
            policy: PolicyKind::default(),
            modified_bits: ModifiedBitsConfig::default(),
            auto_run: AutoRunConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Modified-bit (write bias) configuration.
///
/// The modified bit is never read by a replacement policy; it only makes the
/// page table look like a live system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedBitsConfig {
    /// Random or never
    #[serde(default)]
    pub mode: ModifiedBitsMode,

    /// Probability that a hit sets the modified bit
    #[serde(default = "ModifiedBitsConfig::default_hit_probability")]
    pub hit_probability: f64,

    /// Probability that a fault-load sets the modified bit
    #[serde(default = "ModifiedBitsConfig::default_load_probability")]
    pub load_probability: f64,

    /// RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ModifiedBitsConfig {
    /// Returns the default hit write probability.
    fn default_hit_probability() -> f64 {
        defaults::HIT_WRITE_PROBABILITY
    }

    /// Returns the default load write probability.
    fn default_load_probability() -> f64 {
        defaults::LOAD_WRITE_PROBABILITY
    }

    /// A configuration that never sets the modified bit.
    pub fn never() -> Self {
        Self {
            mode: ModifiedBitsMode::Never,
            ..Self::default()
        }
    }

    /// Checks both probabilities lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("hit_probability", self.hit_probability),
            ("load_probability", self.load_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ModifiedBitsConfig {
    fn default() -> Self {
        Self {
            mode: ModifiedBitsMode::default(),
            hit_probability: defaults::HIT_WRITE_PROBABILITY,
            load_probability: defaults::LOAD_WRITE_PROBABILITY,
            seed: None,
        }
    }
}

/// Auto-run pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRunConfig {
    /// Delay between steps in milliseconds (0 runs flat out)
    #[serde(default = "AutoRunConfig::default_interval")]
    pub interval_ms: u64,
}

impl AutoRunConfig {
    /// Returns the default step interval.
    fn default_interval() -> u64 {
        defaults::STEP_INTERVAL_MS
    }
}

impl Default for AutoRunConfig {
    fn default() -> Self {
        Self {
            interval_ms: defaults::STEP_INTERVAL_MS,
        }
    }
}

/// Random reference string generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of references to generate (clamped to `[1, MAX_GENERATED_LENGTH]`)
    #[serde(default = "GeneratorConfig::default_length")]
    pub length: usize,

    /// RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Returns the default generated length.
    fn default_length() -> usize {
        defaults::GENERATED_LENGTH
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: defaults::GENERATED_LENGTH,
            seed: None,
        }
    }
}
