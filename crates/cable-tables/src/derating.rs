//! Temperature derating bands
use cable_core::{CableError, Result};
use serde::{Deserialize, Serialize};

/// Factor that applies up to and including `max_temp_c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeratingBand {
    pub max_temp_c: f64,
    pub factor: f64,
}

impl DeratingBand {
    pub const fn new(max_temp_c: f64, factor: f64) -> Self {
        Self { max_temp_c, factor }
    }
}

/// Ascending temperature bands for one insulation family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeratingTable {
    bands: Vec<DeratingBand>,
}

impl DeratingTable {
    pub fn new(bands: Vec<DeratingBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[DeratingBand] {
        &self.bands
    }

    /// Factor of the first band at or above `temperature_c`.
    ///
    /// Temperatures between bands round up to the hotter band. Anything below
    /// the first band gets the first factor, anything above the last band (or
    /// not a number) gets the last one.
    pub fn factor(&self, temperature_c: f64) -> f64 {
        self.bands
            .iter()
            .find(|b| temperature_c <= b.max_temp_c)
            .or_else(|| self.bands.last())
            .map(|b| b.factor)
            .unwrap_or(1.0)
    }

    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        if self.bands.is_empty() {
            return Err(CableError::Config(format!("derating table {} is empty", name)));
        }
        for band in &self.bands {
            if !band.max_temp_c.is_finite() {
                return Err(CableError::Config(format!(
                    "derating {}: band temperature must be finite",
                    name
                )));
            }
            if !(band.factor > 0.0 && band.factor <= 1.0) {
                return Err(CableError::Config(format!(
                    "derating {}: factor {} at {}°C outside (0, 1]",
                    name, band.factor, band.max_temp_c
                )));
            }
        }
        for pair in self.bands.windows(2) {
            if pair[1].max_temp_c <= pair[0].max_temp_c {
                return Err(CableError::Config(format!(
                    "derating {}: band temperatures must be strictly increasing",
                    name
                )));
            }
            if pair[1].factor > pair[0].factor {
                return Err(CableError::Config(format!(
                    "derating {}: factor rises between {}°C and {}°C",
                    name, pair[0].max_temp_c, pair[1].max_temp_c
                )));
            }
        }
        Ok(())
    }
}
