//! Conductor entries grouped by material and insulation
use cable_core::{CableError, CableSize, CableType, Material, Result};
use serde::{Deserialize, Serialize};

/// One manufactured cross-section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorSize {
    pub size: CableSize,
    /// Ampacity in amps at the 30 °C reference ambient
    pub ampacity_base: f64,
    /// Reference mass of a 100 m roll in kg, when published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_per_100m: Option<f64>,
}

impl ConductorSize {
    pub const fn new(size: f64, ampacity_base: f64) -> Self {
        Self {
            size: CableSize::from_mm2(size),
            ampacity_base,
            weight_per_100m: None,
        }
    }

    pub const fn weighed(size: f64, ampacity_base: f64, weight_per_100m: f64) -> Self {
        Self {
            size: CableSize::from_mm2(size),
            ampacity_base,
            weight_per_100m: Some(weight_per_100m),
        }
    }
}

/// All published sizes for one material/insulation combination, ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorTable {
    pub material: Material,
    pub cable_type: CableType,
    pub entries: Vec<ConductorSize>,
}

impl ConductorTable {
    pub fn matches(&self, material: Material, cable_type: CableType) -> bool {
        self.material == material && self.cable_type == cable_type
    }

    pub fn find(&self, size: CableSize) -> Option<&ConductorSize> {
        self.entries.iter().find(|e| e.size == size)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let name = format!("{}/{}", self.material, self.cable_type);
        if self.entries.is_empty() {
            return Err(CableError::Config(format!("conductor table {} is empty", name)));
        }

        for entry in &self.entries {
            let size = entry.size.mm2();
            if !size.is_finite() || size <= 0.0 {
                return Err(CableError::Config(format!(
                    "{}: size {} must be positive",
                    name, entry.size
                )));
            }
            if !entry.ampacity_base.is_finite() || entry.ampacity_base <= 0.0 {
                return Err(CableError::Config(format!(
                    "{}: ampacity of {} mm² must be positive",
                    name, entry.size
                )));
            }
            if let Some(w) = entry.weight_per_100m {
                if !w.is_finite() || w <= 0.0 {
                    return Err(CableError::Config(format!(
                        "{}: weight of {} mm² must be positive",
                        name, entry.size
                    )));
                }
            }
        }

        for pair in self.entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.size >= b.size {
                return Err(CableError::Config(format!(
                    "{}: sizes must be strictly increasing ({} then {})",
                    name, a.size, b.size
                )));
            }
            if b.ampacity_base < a.ampacity_base {
                return Err(CableError::Config(format!(
                    "{}: ampacity decreases from {} mm² to {} mm²",
                    name, a.size, b.size
                )));
            }
        }

        let weighed: Vec<&ConductorSize> = self
            .entries
            .iter()
            .filter(|e| e.weight_per_100m.is_some())
            .collect();
        for pair in weighed.windows(2) {
            if pair[1].weight_per_100m < pair[0].weight_per_100m {
                return Err(CableError::Config(format!(
                    "{}: weight decreases from {} mm² to {} mm²",
                    name, pair[0].size, pair[1].size
                )));
            }
        }

        Ok(())
    }
}
