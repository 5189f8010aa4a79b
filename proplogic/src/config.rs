//! WalkSAT configuration.
use serde::Deserialize;

use crate::error::Error;

/// Configurable parameters of the WalkSAT local search.
#[derive(Clone, PartialEq, Debug)]
pub struct WalkSatConfig {
    /// Number of flips before giving up. (Default: 10000)
    pub max_flips: usize,

    /// Probability of flipping a random variable instead of the best one. (Default: 0.5)
    pub random_walk_probability: f64,

    /// Seed for the random number generator, a fresh seed is used for every search when unset.
    /// (Default: None)
    pub seed: Option<u64>,
}

impl Default for WalkSatConfig {
    fn default() -> WalkSatConfig {
        WalkSatConfig {
            max_flips: 10000,
            random_walk_probability: 0.5,
            seed: None,
        }
    }
}

impl WalkSatConfig {
    /// Lists the available options together with their defaults.
    pub fn help() -> &'static str {
        concat!(
            "max_flips: Number of flips before giving up. (Default: 10000)\n",
            "random_walk_probability: Probability of flipping a random variable instead of the ",
            "best one. (Default: 0.5)\n",
            "seed: Seed for the random number generator, a fresh seed is used for every search ",
            "when unset. (Default: None)\n",
        )
    }

    /// Applies a partial update.
    ///
    /// The configuration is unchanged when the update contains invalid values.
    pub fn apply(&mut self, update: &WalkSatConfigUpdate) -> Result<(), Error> {
        if let Some(probability) = update.random_walk_probability {
            check_probability(probability)?;
        }

        if let Some(max_flips) = update.max_flips {
            self.max_flips = max_flips;
        }
        if let Some(probability) = update.random_walk_probability {
            self.random_walk_probability = probability;
        }
        if let Some(seed) = update.seed {
            self.seed = Some(seed);
        }
        Ok(())
    }
}

/// Partial update of a [`WalkSatConfig`].
///
/// Deserializing this from TOML allows configuration files like
///
/// ```toml
/// max_flips = 50000
/// seed = 7
/// ```
#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkSatConfigUpdate {
    pub max_flips: Option<usize>,
    pub random_walk_probability: Option<f64>,
    pub seed: Option<u64>,
}

impl WalkSatConfigUpdate {
    /// An update that changes nothing.
    pub fn new() -> WalkSatConfigUpdate {
        WalkSatConfigUpdate::default()
    }

    /// Combines two updates, values set in `other` take precedence.
    pub fn merge(&mut self, other: WalkSatConfigUpdate) {
        if other.max_flips.is_some() {
            self.max_flips = other.max_flips;
        }
        if other.random_walk_probability.is_some() {
            self.random_walk_probability = other.random_walk_probability;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
    }
}

pub(crate) fn check_probability(probability: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(Error::Precondition(format!(
            "Random walk probability must be between 0 and 1, got {}",
            probability
        )))
    }
}
