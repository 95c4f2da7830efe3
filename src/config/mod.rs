//! Configuration management for huebreed

use crate::paths;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tuning constants for the scheme generators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Number of schemes generated fully at random before the library is used
    #[serde(default = "default_random_phase_len")]
    pub random_phase_len: u64,

    /// Schemes over which jitter ramps from 0 up to `max_jitter`
    #[serde(default = "default_jitter_ramp")]
    pub jitter_ramp: f64,

    /// Ceiling for the jitter applied to library schemes
    #[serde(default = "default_max_jitter")]
    pub max_jitter: f64,

    /// How many of the most recent likes and dislikes are considered
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Mutation rate at the start of a session
    #[serde(default = "default_initial_mutation_rate")]
    pub initial_mutation_rate: f64,

    /// Schemes over which the mutation rate falls by 1.0
    #[serde(default = "default_mutation_decay")]
    pub mutation_decay: f64,

    /// Floor for the mutation rate
    #[serde(default = "default_min_mutation_rate")]
    pub min_mutation_rate: f64,

    /// Multiplier applied to the mutation rate when repelling a disliked color
    #[serde(default = "default_repulsion_factor")]
    pub repulsion_factor: f64,
}

const fn default_random_phase_len() -> u64 {
    30
}

const fn default_jitter_ramp() -> f64 {
    140.0
}

const fn default_max_jitter() -> f64 {
    0.5
}

const fn default_history_window() -> usize {
    15
}

const fn default_initial_mutation_rate() -> f64 {
    0.5
}

const fn default_mutation_decay() -> f64 {
    200.0
}

const fn default_min_mutation_rate() -> f64 {
    0.1
}

const fn default_repulsion_factor() -> f64 {
    2.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            random_phase_len: default_random_phase_len(),
            jitter_ramp: default_jitter_ramp(),
            max_jitter: default_max_jitter(),
            history_window: default_history_window(),
            initial_mutation_rate: default_initial_mutation_rate(),
            mutation_decay: default_mutation_decay(),
            min_mutation_rate: default_min_mutation_rate(),
            repulsion_factor: default_repulsion_factor(),
        }
    }
}

impl EngineConfig {
    /// Check that every constant is in a usable range
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range field
    pub fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;
        ensure!(
            self.jitter_ramp.is_finite() && self.jitter_ramp > 0.0,
            "jitter_ramp must be positive, got {}",
            self.jitter_ramp
        );
        ensure!(
            unit.contains(&self.max_jitter),
            "max_jitter must be within 0..=1, got {}",
            self.max_jitter
        );
        ensure!(self.history_window > 0, "history_window must be at least 1");
        ensure!(
            unit.contains(&self.initial_mutation_rate),
            "initial_mutation_rate must be within 0..=1, got {}",
            self.initial_mutation_rate
        );
        ensure!(
            unit.contains(&self.min_mutation_rate),
            "min_mutation_rate must be within 0..=1, got {}",
            self.min_mutation_rate
        );
        ensure!(
            self.mutation_decay.is_finite() && self.mutation_decay > 0.0,
            "mutation_decay must be positive, got {}",
            self.mutation_decay
        );
        ensure!(
            self.repulsion_factor.is_finite() && self.repulsion_factor >= 1.0,
            "repulsion_factor must be at least 1, got {}",
            self.repulsion_factor
        );
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Generator tuning
    #[serde(default)]
    pub engine: EngineConfig,

    /// Reference library to use instead of the builtin one
    #[serde(default)]
    pub library_path: Option<PathBuf>,

    /// Number of schemes dealt per round
    #[serde(default = "default_cards_per_round")]
    pub cards_per_round: usize,
}

const fn default_cards_per_round() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            library_path: None,
            cards_per_round: default_cards_per_round(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds out-of-range values
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .engine
            .validate()
            .with_context(|| format!("Invalid engine settings in {}", path.display()))?;
        ensure!(
            config.cards_per_round > 0,
            "cards_per_round must be at least 1 in {}",
            path.display()
        );
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("huebreed")
            .join("config.json")
    }
}
