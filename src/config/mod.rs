//! Planner configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::export::DEFAULT_DIRECTIONS_BASE;
use crate::models::{Travel, TravelMode, DRIVING_SPEED_KMH, WALKING_SPEED_KMH};
use crate::ordering::{Strategy, MAX_EXHAUSTIVE_SPOTS};

/// Tunables for route planning. Every field has a default, so an empty file
/// is a valid configuration.
///
/// ```toml
/// walking_speed_kmh = 4.0
/// driving_speed_kmh = 40.0
/// max_exhaustive_spots = 5
/// default_strategy = "rank_score"
/// default_mode = "driving"
/// directions_base_url = "https://www.google.com/maps/dir/"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Walking speed in km/h.
    pub walking_speed_kmh: f64,
    /// Driving speed in km/h.
    pub driving_speed_kmh: f64,
    /// Cap for the exhaustive orderer; values above 5 are clamped to 5.
    pub max_exhaustive_spots: usize,
    /// Strategy used when none is given.
    pub default_strategy: Strategy,
    /// Travel mode used when none is given.
    pub default_mode: TravelMode,
    /// Base URL for directions deep links.
    pub directions_base_url: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walking_speed_kmh: WALKING_SPEED_KMH,
            driving_speed_kmh: DRIVING_SPEED_KMH,
            max_exhaustive_spots: MAX_EXHAUSTIVE_SPOTS,
            default_strategy: Strategy::default(),
            default_mode: TravelMode::default(),
            directions_base_url: DEFAULT_DIRECTIONS_BASE.to_string(),
        }
    }
}

impl PlannerConfig {
    /// Loads and validates a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that speeds are positive and the cap is usable.
    pub fn validate(&self) -> Result<()> {
        for (field, speed) in [
            ("walking_speed_kmh", self.walking_speed_kmh),
            ("driving_speed_kmh", self.driving_speed_kmh),
        ] {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(RoutingError::Config {
                    message: format!("{field} must be a positive number, got {speed}"),
                });
            }
        }
        if self.max_exhaustive_spots == 0 {
            return Err(RoutingError::Config {
                message: "max_exhaustive_spots must be at least 1".to_string(),
            });
        }
        url::Url::parse(&self.directions_base_url)?;
        Ok(())
    }

    /// Travel mode paired with the configured speed.
    pub fn travel(&self, mode: TravelMode) -> Travel {
        let speed = match mode {
            TravelMode::Walking => self.walking_speed_kmh,
            TravelMode::Driving => self.driving_speed_kmh,
        };
        Travel::new(mode, speed)
    }

    /// Effective exhaustive cap after clamping.
    pub fn exhaustive_cap(&self) -> usize {
        self.max_exhaustive_spots.min(MAX_EXHAUSTIVE_SPOTS)
    }
}
