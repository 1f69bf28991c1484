//! Risk classification by weight ratio
//!
//! Counterfeit rolls are light: thinner strands, copper-clad aluminium, or
//! short length. Overweight rolls are over-specified, never suspicious, so the
//! scale is one-sided.

use cable_core::RiskLevel;
use serde::{Deserialize, Serialize};

/// Slack for ratios such as 2.635 / 3.1 that land one ulp below a threshold
const RATIO_TOLERANCE: f64 = 1e-9;

/// Ratio thresholds of measured to standard weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// At or above this ratio the roll is safe (deviation >= -5%)
    pub safe_ratio: f64,
    /// At or above this ratio, and below `safe_ratio`, a warning (deviation >= -15%)
    pub warning_ratio: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            safe_ratio: 0.95,
            warning_ratio: 0.85,
        }
    }
}

impl RiskThresholds {
    /// Classify a measured/standard weight ratio; a roll exactly on a
    /// threshold takes the safer level
    pub fn classify(&self, ratio: f64) -> RiskLevel {
        if ratio >= self.safe_ratio - RATIO_TOLERANCE {
            RiskLevel::Safe
        } else if ratio >= self.warning_ratio - RATIO_TOLERANCE {
            RiskLevel::Warning
        } else {
            RiskLevel::Danger
        }
    }

    /// Shortfall in percent at which a level starts
    pub fn shortfall_percent(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Safe => 0.0,
            RiskLevel::Warning => (1.0 - self.safe_ratio) * 100.0,
            RiskLevel::Danger => (1.0 - self.warning_ratio) * 100.0,
        }
    }
}
