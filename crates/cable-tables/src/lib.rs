//! Cable Tables: Reference Data for Sizing and Weight Checks
//!
//! Single source of truth for published conductor sizes, their base ampacity,
//! the mass of a 100 m roll, temperature derating and the standard breaker
//! ladder. Tables are immutable once built; every lookup is a pure function.
//!
//! # Example
//!
//! ```
//! use cable_core::{CableSize, CableType, Material};
//! use cable_tables::ReferenceTables;
//!
//! let tables = ReferenceTables::standard();
//! let amps = tables
//!     .ampacity(CableSize::from_mm2(4.0), Material::Cu, CableType::Yjv)
//!     .unwrap();
//! assert_eq!(amps, 38.0);
//!
//! let factor = tables.derating_factor(CableType::Yjv, 40.0).unwrap();
//! assert_eq!(factor, 0.91);
//! ```

pub mod conductor;
pub mod derating;
mod loader;
pub mod standard;

pub use conductor::{ConductorSize, ConductorTable};
pub use derating::{DeratingBand, DeratingTable};

use cable_core::{CableError, CableSize, CableType, Material, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static STANDARD: Lazy<ReferenceTables> = Lazy::new(standard::build);

/// Conductor, weight, derating and breaker reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub(crate) conductors: Vec<ConductorTable>,
    pub(crate) derating: BTreeMap<CableType, DeratingTable>,
    pub(crate) breakers: Vec<u32>,
}

impl ReferenceTables {
    /// Built-in tables, constructed once per process
    pub fn standard() -> &'static ReferenceTables {
        &STANDARD
    }

    /// Assemble and validate a table set
    pub fn new(
        conductors: Vec<ConductorTable>,
        derating: BTreeMap<CableType, DeratingTable>,
        breakers: Vec<u32>,
    ) -> Result<Self> {
        let tables = Self {
            conductors,
            derating,
            breakers,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Ascending conductor entries for one material/insulation combination
    pub fn conductors(
        &self,
        material: Material,
        cable_type: CableType,
    ) -> Result<&[ConductorSize]> {
        self.conductors
            .iter()
            .find(|t| t.matches(material, cable_type))
            .map(|t| t.entries.as_slice())
            .ok_or_else(|| {
                CableError::Lookup(format!(
                    "no conductor table for material {} with {} insulation",
                    material, cable_type
                ))
            })
    }

    /// Base ampacity at the 30 °C reference ambient
    pub fn ampacity(
        &self,
        size: CableSize,
        material: Material,
        cable_type: CableType,
    ) -> Result<f64> {
        self.conductors(material, cable_type)?
            .iter()
            .find(|e| e.size == size)
            .map(|e| e.ampacity_base)
            .ok_or_else(|| {
                CableError::Lookup(format!(
                    "{} mm² is not a published {}/{} size",
                    size, material, cable_type
                ))
            })
    }

    /// Reference weight of a 100 m single-core copper BV roll
    pub fn weight_per_100m(&self, size: CableSize) -> Result<f64> {
        self.weight_per_100m_for(size, Material::Cu, CableType::Bv)
    }

    /// Reference weight of a 100 m roll for any published combination
    pub fn weight_per_100m_for(
        &self,
        size: CableSize,
        material: Material,
        cable_type: CableType,
    ) -> Result<f64> {
        self.conductors(material, cable_type)
            .ok()
            .and_then(|entries| entries.iter().find(|e| e.size == size))
            .and_then(|e| e.weight_per_100m)
            .ok_or_else(|| {
                CableError::Lookup(format!(
                    "no reference roll weight for {} mm² {}/{}",
                    size, material, cable_type
                ))
            })
    }

    /// Derating multiplier in (0, 1] for the ambient temperature
    pub fn derating_factor(&self, cable_type: CableType, temperature_c: f64) -> Result<f64> {
        self.derating
            .get(&cable_type)
            .map(|t| t.factor(temperature_c))
            .ok_or_else(|| {
                CableError::Lookup(format!("no derating table for {} insulation", cable_type))
            })
    }

    /// Every size that appears in any conductor table, ascending
    pub fn published_sizes(&self) -> Vec<CableSize> {
        let mut sizes: Vec<CableSize> = Vec::new();
        for entry in self.conductors.iter().flat_map(|t| t.entries.iter()) {
            if !sizes.contains(&entry.size) {
                sizes.push(entry.size);
            }
        }
        sizes.sort_by(|a, b| a.mm2().total_cmp(&b.mm2()));
        sizes
    }

    /// Sizes with a published reference roll weight for the combination
    pub fn weighed_sizes(&self, material: Material, cable_type: CableType) -> Vec<CableSize> {
        self.conductors(material, cable_type)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.weight_per_100m.is_some())
                    .map(|e| e.size)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Standard MCB ratings, ascending
    pub fn breaker_ladder(&self) -> &[u32] {
        &self.breakers
    }

    /// Check every table invariant
    pub fn validate(&self) -> Result<()> {
        if self.conductors.is_empty() {
            return Err(CableError::Config("no conductor tables".to_string()));
        }
        for (i, table) in self.conductors.iter().enumerate() {
            if self.conductors[..i]
                .iter()
                .any(|t| t.matches(table.material, table.cable_type))
            {
                return Err(CableError::Config(format!(
                    "duplicate conductor table {}/{}",
                    table.material, table.cable_type
                )));
            }
            table.validate()?;
            if !self.derating.contains_key(&table.cable_type) {
                return Err(CableError::Config(format!(
                    "no derating table for {} insulation",
                    table.cable_type
                )));
            }
        }

        for (cable_type, table) in &self.derating {
            table.validate(&cable_type.to_string())?;
        }

        if self.breakers.is_empty() || self.breakers[0] == 0 {
            return Err(CableError::Config(
                "breaker ladder must hold positive ratings".to_string(),
            ));
        }
        if self.breakers.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CableError::Config(
                "breaker ladder must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(v: f64) -> CableSize {
        CableSize::from_mm2(v)
    }

    #[test]
    fn test_standard_tables_are_valid() {
        ReferenceTables::standard().validate().unwrap();
    }

    #[test]
    fn test_ampacity_lookup() {
        let t = ReferenceTables::standard();
        assert_eq!(t.ampacity(size(2.5), Material::Cu, CableType::Bv).unwrap(), 24.0);
        assert_eq!(t.ampacity(size(95.0), Material::Cu, CableType::Yjv).unwrap(), 285.0);
        assert_eq!(t.ampacity(size(10.0), Material::Al, CableType::Yjv).unwrap(), 53.0);
    }

    #[test]
    fn test_ampacity_unknown_size() {
        let err = ReferenceTables::standard()
            .ampacity(size(3.0), Material::Cu, CableType::Bv)
            .unwrap_err();
        assert!(matches!(err, CableError::Lookup(_)));
    }

    #[test]
    fn test_weight_covers_client_sizes() {
        let t = ReferenceTables::standard();
        for label in ["1.5", "2.5", "4.0", "6.0", "10", "16"] {
            let s: CableSize = label.parse().unwrap();
            assert!(t.weight_per_100m(s).is_ok(), "missing weight for {}", label);
        }
        assert_eq!(t.weight_per_100m(size(2.5)).unwrap(), 3.1);
    }

    #[test]
    fn test_weight_absent_is_lookup_error() {
        let t = ReferenceTables::standard();
        assert!(matches!(t.weight_per_100m(size(25.0)), Err(CableError::Lookup(_))));
        assert!(matches!(
            t.weight_per_100m_for(size(2.5), Material::Cu, CableType::Yjv),
            Err(CableError::Lookup(_))
        ));
        assert!(matches!(
            t.weight_per_100m_for(size(2.5), Material::Al, CableType::Bv),
            Err(CableError::Lookup(_))
        ));
    }

    #[test]
    fn test_derating_per_insulation() {
        let t = ReferenceTables::standard();
        assert_eq!(t.derating_factor(CableType::Bv, 40.0).unwrap(), 0.87);
        assert_eq!(t.derating_factor(CableType::Yjv, 40.0).unwrap(), 0.91);
        assert_eq!(t.derating_factor(CableType::Yjv, 25.0).unwrap(), 1.0);
        assert_eq!(t.derating_factor(CableType::Bv, 60.0).unwrap(), 0.71);
    }

    #[test]
    fn test_published_sizes_sorted_and_unique() {
        let sizes = ReferenceTables::standard().published_sizes();
        assert_eq!(sizes.len(), 11);
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(sizes[0].label(), "1.5");
        assert_eq!(sizes[10].label(), "95");
    }

    #[test]
    fn test_weighed_sizes() {
        let labels: Vec<String> = ReferenceTables::standard()
            .weighed_sizes(Material::Cu, CableType::Bv)
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(labels, vec!["1.5", "2.5", "4.0", "6.0", "10", "16"]);
    }

    #[test]
    fn test_new_rejects_missing_derating() {
        let conductors = vec![ConductorTable {
            material: Material::Cu,
            cable_type: CableType::Bv,
            entries: vec![ConductorSize::new(1.5, 17.0)],
        }];
        let err = ReferenceTables::new(conductors, BTreeMap::new(), vec![6, 10]).unwrap_err();
        assert!(matches!(err, CableError::Config(_)));
    }

    #[test]
    fn test_new_rejects_unsorted_breakers() {
        let mut derating = BTreeMap::new();
        derating.insert(CableType::Bv, DeratingTable::new(vec![DeratingBand::new(30.0, 1.0)]));
        let conductors = vec![ConductorTable {
            material: Material::Cu,
            cable_type: CableType::Bv,
            entries: vec![ConductorSize::new(1.5, 17.0)],
        }];
        assert!(ReferenceTables::new(conductors, derating, vec![10, 6]).is_err());
    }
}
