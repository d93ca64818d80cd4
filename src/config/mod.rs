//! Validator configuration.
//!
//! [`Limits`] carries every threshold the checker compares against. Defaults
//! describe a standard residential interior; hosts may override individual
//! values from a JSON document.

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};
use crate::logging::Logger;

/// Numeric thresholds used by validation, clearance and advice stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Smallest accepted room edge, feet.
    pub room_min_ft: f64,
    /// Largest accepted room edge, feet.
    pub room_max_ft: f64,
    /// Smallest accepted furniture dimension, inches.
    pub item_min_in: f64,
    /// Largest accepted furniture dimension, inches.
    pub item_max_in: f64,
    pub max_pieces: usize,
    /// Standard interior doorway width, inches.
    pub doorway_in: f64,
    /// Depth a piece may occupy while leaving walkway clearance along a wall, inches.
    pub depth_allowance_in: f64,
    pub walkway_min_in: u32,
    pub walkway_preferred_in: u32,
    /// Characters of malformed furniture text echoed back in parse errors.
    pub excerpt_chars: usize,
    /// Length-to-width ratio above which a room counts as long and narrow.
    pub long_room_ratio: f64,
    /// Open-space percent below which fewer pieces are suggested.
    pub crowded_percent: f64,
    /// Open-space percent above which accent pieces are suggested.
    pub spacious_percent: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            room_min_ft: 6.0,
            room_max_ft: 50.0,
            item_min_in: 6.0,
            item_max_in: 200.0,
            max_pieces: 20,
            doorway_in: 32.0,
            depth_allowance_in: 36.0,
            walkway_min_in: 30,
            walkway_preferred_in: 36,
            excerpt_chars: 200,
            long_room_ratio: 1.5,
            crowded_percent: 50.0,
            spacious_percent: 80.0,
        }
    }
}

impl Limits {
    /// Load overrides from JSON. Missing keys keep their defaults; unknown keys are rejected.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(CheckError::Arguments)
    }

    pub fn room_in_range(&self, feet: f64) -> bool {
        (self.room_min_ft..=self.room_max_ft).contains(&feet)
    }

    pub fn item_in_range(&self, inches: f64) -> bool {
        (self.item_min_in..=self.item_max_in).contains(&inches)
    }
}

/// Configuration knobs for [`crate::LayoutValidator`].
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub limits: Limits,
    /// Optional structured logger; `None` keeps the validator silent.
    pub logger: Option<Logger>,
    /// Target field used on every emitted event.
    pub log_target: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            logger: None,
            log_target: "room_check::validator".to_string(),
        }
    }
}

impl ValidatorConfig {
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }
}
