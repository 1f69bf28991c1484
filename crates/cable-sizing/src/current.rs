//! Load normalisation
use cable_core::{PowerUnit, VoltageType};

/// Mechanical horsepower in watts
pub const WATTS_PER_HP: f64 = 745.7;

/// Convert a load to line current in amps.
///
/// Power factor is taken as 1.0: only the real component of the load is
/// modelled. `Amps` passes through regardless of the supply.
pub fn load_current(power: f64, unit: PowerUnit, voltage: VoltageType) -> f64 {
    let watts = match unit {
        PowerUnit::Amps => return power,
        PowerUnit::Kw => power * 1000.0,
        PowerUnit::Hp => power * WATTS_PER_HP,
    };
    let volts = voltage.nominal_volts();
    if voltage.is_three_phase() {
        watts / (3f64.sqrt() * volts)
    } else {
        watts / volts
    }
}
