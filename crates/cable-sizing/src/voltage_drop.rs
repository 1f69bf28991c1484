//! Voltage drop along the run
use cable_core::{CableSize, Material, VoltageType};

/// Resistivity in Ω·mm²/m at conductor operating temperature
pub fn resistivity(material: Material) -> f64 {
    match material {
        Material::Cu => 0.0175,
        Material::Al => 0.028,
    }
}

/// Drop as a percentage of nominal voltage.
///
/// Single-phase counts the round trip (factor 2), three-phase the line-to-line
/// drop of one leg (factor √3).
pub fn voltage_drop_percent(
    current: f64,
    distance_m: f64,
    size: CableSize,
    material: Material,
    voltage: VoltageType,
) -> f64 {
    let k = if voltage.is_three_phase() { 3f64.sqrt() } else { 2.0 };
    let drop_volts = k * current * distance_m * resistivity(material) / size.mm2();
    drop_volts / voltage.nominal_volts() * 100.0
}
