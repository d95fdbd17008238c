//! Behavioural tuning for a session.
//!
//! The defaults reproduce the canonical canvas: 40px creation floor,
//! 20px split floor, 10px nudge, 5px click tolerance. Hosts may pass a
//! partial JSON object; missing keys fall back to the defaults.

use crate::model::{CLICK_THRESHOLD, MIN_PART_SIZE, MIN_PILL_SIZE, NUDGE_OFFSET};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Floor for both sides of a pill while it is being created.
    pub min_pill_size: f64,

    /// Floor for the cursor-side part of a split. A pill needs at least
    /// twice this along an axis to be splittable along it.
    pub min_part_size: f64,

    /// Distance a too-small pill is shifted when clicked.
    pub nudge_offset: f64,

    /// Per-axis travel above which a pointer-up is a drag, not a click.
    pub click_threshold: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_pill_size: MIN_PILL_SIZE,
            min_part_size: MIN_PART_SIZE,
            nudge_offset: NUDGE_OFFSET,
            click_threshold: CLICK_THRESHOLD,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a (possibly partial) JSON config object.
    ///
    /// # Errors
    /// Returns a message on malformed JSON or on values rejected by
    /// [`SessionConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SessionConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid session config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("minPillSize", self.min_pill_size),
            ("minPartSize", self.min_part_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        if self.min_pill_size < self.min_part_size {
            return Err(format!(
                "minPillSize ({}) must not be smaller than minPartSize ({})",
                self.min_pill_size, self.min_part_size
            ));
        }
        if !self.nudge_offset.is_finite() {
            return Err(format!(
                "nudgeOffset must be finite, got {}",
                self.nudge_offset
            ));
        }
        if !self.click_threshold.is_finite() || self.click_threshold < 0.0 {
            return Err(format!(
                "clickThreshold must be a non-negative number, got {}",
                self.click_threshold
            ));
        }
        Ok(())
    }
}
