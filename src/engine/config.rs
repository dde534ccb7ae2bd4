use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::AreaUnits;

/// Default distance, in meters, within which an area-mode click closes the ring.
pub const DEFAULT_PROXIMITY_THRESHOLD_M: f64 = 15.0;

/// How an area measurement is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureStrategy {
    /// Only a double-click finishes the ring.
    ExplicitTerminationOnly,
    /// A click near the first vertex, or a double-click, finishes the ring.
    #[default]
    ProximityOrExplicitTermination,
}

impl ClosureStrategy {
    /// Returns `true` if clicking near the first vertex closes the ring.
    #[must_use]
    pub fn closes_on_proximity(self) -> bool {
        matches!(self, Self::ProximityOrExplicitTermination)
    }
}

/// Tunables for a [`MeasureEngine`](super::MeasureEngine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Rule for finishing area measurements.
    pub closure: ClosureStrategy,
    /// Ring-closure distance to the first vertex, in meters.
    pub proximity_threshold_m: f64,
    /// Display policy for area labels.
    pub area_units: AreaUnits,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            closure: ClosureStrategy::default(),
            proximity_threshold_m: DEFAULT_PROXIMITY_THRESHOLD_M,
            area_units: AreaUnits::default(),
        }
    }
}

impl MeasureConfig {
    /// Sets the area closure rule.
    #[must_use]
    pub fn with_closure(mut self, closure: ClosureStrategy) -> Self {
        self.closure = closure;
        self
    }

    /// Sets the ring-closure distance.
    #[must_use]
    pub fn with_proximity_threshold(mut self, meters: f64) -> Self {
        self.proximity_threshold_m = meters;
        self
    }

    /// Sets the area display policy.
    #[must_use]
    pub fn with_area_units(mut self, units: AreaUnits) -> Self {
        self.area_units = units;
        self
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the proximity threshold is not a positive, finite
    /// number of meters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.proximity_threshold_m;
        if !t.is_finite() || t <= 0.0 {
            return Err(ConfigError::InvalidProximityThreshold(t));
        }
        Ok(())
    }
}
