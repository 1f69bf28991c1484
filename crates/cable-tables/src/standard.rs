//! Built-in reference data
//!
//! Copper ampacities follow the factory catalogue for single-core wire laid in
//! air at 30 °C; aluminium is derived at the usual ~0.78 ratio. Roll weights are
//! published for single-core copper BV only.

use crate::conductor::{ConductorSize, ConductorTable};
use crate::derating::{DeratingBand, DeratingTable};
use crate::ReferenceTables;
use cable_core::{CableType, Material};
use std::collections::BTreeMap;

/// Standard MCB ratings in amps
pub const BREAKER_LADDER: [u32; 16] = [
    6, 10, 16, 20, 25, 32, 40, 50, 63, 80, 100, 125, 160, 200, 250, 400,
];

const CU_BV: [ConductorSize; 11] = [
    ConductorSize::weighed(1.5, 17.0, 2.0),
    ConductorSize::weighed(2.5, 24.0, 3.1),
    ConductorSize::weighed(4.0, 32.0, 4.6),
    ConductorSize::weighed(6.0, 40.0, 6.8),
    ConductorSize::weighed(10.0, 55.0, 10.5),
    ConductorSize::weighed(16.0, 75.0, 16.5),
    ConductorSize::new(25.0, 100.0),
    ConductorSize::new(35.0, 125.0),
    ConductorSize::new(50.0, 150.0),
    ConductorSize::new(70.0, 190.0),
    ConductorSize::new(95.0, 230.0),
];

const CU_YJV: [ConductorSize; 11] = [
    ConductorSize::new(1.5, 20.0),
    ConductorSize::new(2.5, 28.0),
    ConductorSize::new(4.0, 38.0),
    ConductorSize::new(6.0, 49.0),
    ConductorSize::new(10.0, 68.0),
    ConductorSize::new(16.0, 91.0),
    ConductorSize::new(25.0, 125.0),
    ConductorSize::new(35.0, 155.0),
    ConductorSize::new(50.0, 185.0),
    ConductorSize::new(70.0, 240.0),
    ConductorSize::new(95.0, 285.0),
];

const AL_BV: [ConductorSize; 11] = [
    ConductorSize::new(1.5, 13.0),
    ConductorSize::new(2.5, 19.0),
    ConductorSize::new(4.0, 25.0),
    ConductorSize::new(6.0, 31.0),
    ConductorSize::new(10.0, 43.0),
    ConductorSize::new(16.0, 59.0),
    ConductorSize::new(25.0, 78.0),
    ConductorSize::new(35.0, 98.0),
    ConductorSize::new(50.0, 117.0),
    ConductorSize::new(70.0, 148.0),
    ConductorSize::new(95.0, 180.0),
];

const AL_YJV: [ConductorSize; 11] = [
    ConductorSize::new(1.5, 16.0),
    ConductorSize::new(2.5, 22.0),
    ConductorSize::new(4.0, 30.0),
    ConductorSize::new(6.0, 38.0),
    ConductorSize::new(10.0, 53.0),
    ConductorSize::new(16.0, 71.0),
    ConductorSize::new(25.0, 98.0),
    ConductorSize::new(35.0, 121.0),
    ConductorSize::new(50.0, 144.0),
    ConductorSize::new(70.0, 187.0),
    ConductorSize::new(95.0, 222.0),
];

// PVC (BV) and XLPE (YJV) correction factors, IEC 60364-5-52, 30 °C in air
const PVC_DERATING: [DeratingBand; 5] = [
    DeratingBand::new(30.0, 1.00),
    DeratingBand::new(35.0, 0.94),
    DeratingBand::new(40.0, 0.87),
    DeratingBand::new(45.0, 0.79),
    DeratingBand::new(50.0, 0.71),
];

const XLPE_DERATING: [DeratingBand; 5] = [
    DeratingBand::new(30.0, 1.00),
    DeratingBand::new(35.0, 0.94),
    DeratingBand::new(40.0, 0.91),
    DeratingBand::new(45.0, 0.87),
    DeratingBand::new(50.0, 0.82),
];

fn conductor_table(
    material: Material,
    cable_type: CableType,
    entries: &[ConductorSize],
) -> ConductorTable {
    ConductorTable {
        material,
        cable_type,
        entries: entries.to_vec(),
    }
}

pub(crate) fn build() -> ReferenceTables {
    let mut derating = BTreeMap::new();
    derating.insert(CableType::Bv, DeratingTable::new(PVC_DERATING.to_vec()));
    derating.insert(CableType::Yjv, DeratingTable::new(XLPE_DERATING.to_vec()));

    ReferenceTables {
        conductors: vec![
            conductor_table(Material::Cu, CableType::Bv, &CU_BV),
            conductor_table(Material::Cu, CableType::Yjv, &CU_YJV),
            conductor_table(Material::Al, CableType::Bv, &AL_BV),
            conductor_table(Material::Al, CableType::Yjv, &AL_YJV),
        ],
        derating,
        breakers: BREAKER_LADDER.to_vec(),
    }
}
