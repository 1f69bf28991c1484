//! Sizing engine
//!
//! Two-pass selection over the ascending conductor table: ampacity after
//! temperature derating picks the first candidate, then breaker coordination
//! and voltage drop may push the choice to larger sizes. Neither ever moves it
//! below the first ampacity-conforming size.

use crate::breaker::select_breaker;
use crate::current::load_current;
use crate::voltage_drop::voltage_drop_percent;
use cable_core::{
    round1, BreakerRating, CableError, CableSize, GoverningConstraint, Result, SizingRequest,
    SizingResult,
};
use cable_tables::{ConductorSize, ReferenceTables};

/// Picks conductor size and breaker rating for a load
#[derive(Debug, Clone, Copy)]
pub struct SizingEngine<'t> {
    tables: &'t ReferenceTables,
}

/// Why a candidate above the first ampacity-conforming size was needed
#[derive(Debug, Default)]
struct Escalation {
    drop: bool,
    breaker: bool,
}

impl<'t> SizingEngine<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self { tables }
    }

    /// Recommend a conductor and breaker for the request
    pub fn size(&self, request: &SizingRequest) -> Result<SizingResult> {
        validate(request)?;

        let current = load_current(request.power, request.power_unit, request.voltage_type);
        let factor = self
            .tables
            .derating_factor(request.cable_type, request.temperature)?;
        let required = current / factor;

        let entries = self.tables.conductors(request.material, request.cable_type)?;
        let first = entries
            .iter()
            .position(|e| e.ampacity_base >= required)
            .ok_or_else(|| ampacity_exhausted(request, current, required, entries))?;

        let mut escalation = Escalation::default();
        for (steps, entry) in entries[first..].iter().enumerate() {
            let safe_ampacity = entry.ampacity_base * factor;
            let ladder = self.tables.breaker_ladder();
            let breaker = match select_breaker(ladder, current, safe_ampacity) {
                Some(rating) => rating,
                None => {
                    escalation.breaker = true;
                    continue;
                }
            };

            let drop = voltage_drop_percent(
                current,
                request.distance,
                entry.size,
                request.material,
                request.voltage_type,
            );
            if drop > request.max_voltage_drop {
                escalation.drop = true;
                continue;
            }

            let governed_by = if steps == 0 {
                if factor < 1.0 {
                    GoverningConstraint::Derating
                } else {
                    GoverningConstraint::Ampacity
                }
            } else if escalation.drop {
                GoverningConstraint::VoltageDrop
            } else {
                GoverningConstraint::BreakerCoordination
            };

            let selection_reason = explain(
                governed_by,
                request,
                entries[first].size,
                entry.size,
                steps,
                current,
                safe_ampacity,
                factor,
                drop,
                breaker,
            );

            tracing::debug!(
                power = request.power,
                unit = ?request.power_unit,
                voltage = %request.voltage_type,
                distance = request.distance,
                current,
                size = %entry.size,
                breaker,
                drop,
                ?governed_by,
                "sized conductor"
            );

            return Ok(SizingResult {
                recommended_size: entry.size,
                current_amps: round1(current),
                safe_ampacity: round1(safe_ampacity),
                mcb_rating: BreakerRating(breaker),
                voltage_drop_percent: round1(drop),
                selection_reason,
                governed_by,
                upsize_steps: steps as u32,
            });
        }

        Err(escalation_exhausted(request, current, entries, &escalation))
    }
}

fn validate(request: &SizingRequest) -> Result<()> {
    if !request.power.is_finite() || request.power <= 0.0 {
        return Err(CableError::validation("power", "must be a positive number"));
    }
    if !request.distance.is_finite() || request.distance <= 0.0 {
        return Err(CableError::validation("distance", "must be a positive number of metres"));
    }
    if !request.max_voltage_drop.is_finite() || request.max_voltage_drop <= 0.0 {
        return Err(CableError::validation(
            "max_voltage_drop",
            "must be a positive percentage",
        ));
    }
    if !request.temperature.is_finite() {
        return Err(CableError::validation("temperature", "must be a number of °C"));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn explain(
    governed_by: GoverningConstraint,
    request: &SizingRequest,
    first: CableSize,
    chosen: CableSize,
    steps: usize,
    current: f64,
    safe_ampacity: f64,
    factor: f64,
    drop: f64,
    breaker: u32,
) -> String {
    match governed_by {
        GoverningConstraint::Ampacity => format!(
            "{} mm² is the smallest {}/{} conductor rated for the {:.1} A load",
            chosen, request.material, request.cable_type, current
        ),
        GoverningConstraint::Derating => format!(
            "{} mm² carries {:.1} A after derating for {}°C ambient (factor {:.2})",
            chosen, safe_ampacity, request.temperature, factor
        ),
        GoverningConstraint::VoltageDrop => format!(
            "Upsized {} step(s) from {} mm² to {} mm² to keep voltage drop within {}% ({:.1}%)",
            steps, first, chosen, request.max_voltage_drop, drop
        ),
        GoverningConstraint::BreakerCoordination => format!(
            "Upsized {} step(s) from {} mm² to {} mm² so a standard {}A breaker fits between the {:.1} A load and the cable rating",
            steps, first, chosen, breaker, current
        ),
    }
}

fn ampacity_exhausted(
    request: &SizingRequest,
    current: f64,
    required: f64,
    entries: &[ConductorSize],
) -> CableError {
    let detail = match entries.last() {
        Some(largest) => format!(
            "{:.1} A load needs {:.1} A of base ampacity at {}°C; the largest {}/{} conductor ({} mm²) is rated {} A",
            current,
            required,
            request.temperature,
            request.material,
            request.cable_type,
            largest.size,
            largest.ampacity_base
        ),
        None => format!("no {}/{} conductors published", request.material, request.cable_type),
    };
    CableError::NoConformingSize(detail)
}

fn escalation_exhausted(
    request: &SizingRequest,
    current: f64,
    entries: &[ConductorSize],
    escalation: &Escalation,
) -> CableError {
    let largest = entries
        .last()
        .map(|e| e.size.label())
        .unwrap_or_default();
    let detail = if escalation.drop {
        format!(
            "voltage drop stays above {}% over {} m up to the largest {}/{} conductor ({} mm²)",
            request.max_voltage_drop,
            request.distance,
            request.material,
            request.cable_type,
            largest
        )
    } else {
        format!(
            "no standard breaker fits between the {:.1} A load and the rating of any conductor up to {} mm²",
            current, largest
        )
    };
    CableError::NoConformingSize(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cable_core::{CableType, Material, PowerUnit, VoltageType};

    fn engine() -> SizingEngine<'static> {
        SizingEngine::new(ReferenceTables::standard())
    }

    #[test]
    fn test_plain_ampacity() {
        let req = SizingRequest::new(20.0, PowerUnit::Amps, VoltageType::SinglePhase220, 10.0)
            .with_cable_type(CableType::Bv)
            .with_temperature(30.0);
        let result = engine().size(&req).unwrap();
        assert_eq!(result.recommended_size.label(), "2.5");
        assert_eq!(result.mcb_rating.amps(), 20);
        assert_eq!(result.governed_by, GoverningConstraint::Ampacity);
        assert_eq!(result.upsize_steps, 0);
    }

    #[test]
    fn test_derating_moves_size_up() {
        // 23 A at 45°C on PVC needs 23 / 0.79 = 29.1 A of base rating
        let req = SizingRequest::new(23.0, PowerUnit::Amps, VoltageType::SinglePhase220, 5.0)
            .with_cable_type(CableType::Bv)
            .with_temperature(45.0);
        let result = engine().size(&req).unwrap();
        assert_eq!(result.recommended_size.label(), "4.0");
        assert_eq!(result.safe_ampacity, 25.3);
        assert_eq!(result.mcb_rating.amps(), 25);
        assert_eq!(result.governed_by, GoverningConstraint::Derating);
        assert!(result.selection_reason.contains("45°C"));
    }

    #[test]
    fn test_breaker_coordination_upsizes() {
        // 4.0 mm² YJV carries 38 A but no ladder rating lies in 33..=38 A
        let req = SizingRequest::new(33.0, PowerUnit::Amps, VoltageType::SinglePhase220, 1.0)
            .with_temperature(30.0);
        let result = engine().size(&req).unwrap();
        assert_eq!(result.recommended_size.label(), "6.0");
        assert_eq!(result.mcb_rating.amps(), 40);
        assert_eq!(result.governed_by, GoverningConstraint::BreakerCoordination);
        assert_eq!(result.upsize_steps, 1);
    }

    #[test]
    fn test_voltage_drop_upsizes() {
        let req = SizingRequest::new(5.0, PowerUnit::Kw, VoltageType::SinglePhase220, 50.0);
        let result = engine().size(&req).unwrap();
        assert_eq!(result.recommended_size.label(), "4.0");
        assert_eq!(result.governed_by, GoverningConstraint::VoltageDrop);
        assert!(result.selection_reason.contains("from 2.5 mm² to 4.0 mm²"));
    }

    #[test]
    fn test_aluminium_needs_larger_conductor() {
        let req = SizingRequest::new(5.0, PowerUnit::Kw, VoltageType::SinglePhase220, 50.0)
            .with_material(Material::Al);
        let result = engine().size(&req).unwrap();
        assert_eq!(result.recommended_size.label(), "6.0");
        assert_eq!(result.voltage_drop_percent, 4.8);
    }

    #[test]
    fn test_validation_errors_name_the_field() {
        let cases = [
            (SizingRequest::new(0.0, PowerUnit::Kw, VoltageType::SinglePhase220, 10.0), "power"),
            (SizingRequest::new(-3.0, PowerUnit::Kw, VoltageType::SinglePhase220, 10.0), "power"),
            (SizingRequest::new(3.0, PowerUnit::Kw, VoltageType::SinglePhase220, 0.0), "distance"),
            (
                SizingRequest::new(3.0, PowerUnit::Kw, VoltageType::SinglePhase220, 10.0)
                    .with_max_voltage_drop(0.0),
                "max_voltage_drop",
            ),
            (
                SizingRequest::new(3.0, PowerUnit::Kw, VoltageType::SinglePhase220, 10.0)
                    .with_temperature(f64::NAN),
                "temperature",
            ),
        ];
        for (req, expected) in cases {
            match engine().size(&req) {
                Err(CableError::Validation { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected validation error on {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_overload_is_no_conforming_size() {
        let req = SizingRequest::new(200.0, PowerUnit::Kw, VoltageType::ThreePhase380, 10.0);
        let err = engine().size(&req).unwrap_err();
        assert!(matches!(err, CableError::NoConformingSize(_)));
        assert!(err.to_string().contains("95 mm²"));
    }

    #[test]
    fn test_long_run_is_no_conforming_size() {
        let req = SizingRequest::new(5.0, PowerUnit::Kw, VoltageType::SinglePhase220, 5000.0);
        let err = engine().size(&req).unwrap_err();
        match err {
            CableError::NoConformingSize(msg) => assert!(msg.contains("voltage drop")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
