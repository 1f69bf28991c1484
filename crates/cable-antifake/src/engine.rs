//! Anti-fake weight check
use crate::risk::RiskThresholds;
use cable_core::{round1, AntiFakeRequest, AntiFakeResult, CableError, Material, Result, RiskLevel};
use cable_tables::ReferenceTables;

/// Compares a weighed roll with its reference weight
#[derive(Debug, Clone, Copy)]
pub struct AntiFakeEngine<'t> {
    tables: &'t ReferenceTables,
    thresholds: RiskThresholds,
}

impl<'t> AntiFakeEngine<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self {
            tables,
            thresholds: RiskThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Classify a roll by how far it falls short of the reference weight
    pub fn check(&self, request: &AntiFakeRequest) -> Result<AntiFakeResult> {
        let measured = request.measured_weight;
        if !measured.is_finite() || measured <= 0.0 {
            return Err(CableError::validation(
                "measured_weight",
                "must be a positive weight in kg",
            ));
        }

        // Reference rolls are copper; only the insulation varies
        let standard = self.tables.weight_per_100m_for(
            request.nominal_size,
            Material::Cu,
            request.cable_type,
        )?;

        let ratio = measured / standard;
        let diff_percent = (measured - standard) / standard * 100.0;
        let risk_level = self.thresholds.classify(ratio);
        let message = describe(&self.thresholds, risk_level, diff_percent, request, standard);

        tracing::debug!(
            size = %request.nominal_size,
            measured,
            standard,
            diff_percent,
            risk = %risk_level,
            "checked roll weight"
        );

        Ok(AntiFakeResult {
            risk_level,
            standard_weight: standard,
            diff_percent: round1(diff_percent),
            is_pass: risk_level == RiskLevel::Safe,
            message,
        })
    }
}

fn describe(
    thresholds: &RiskThresholds,
    level: RiskLevel,
    diff_percent: f64,
    request: &AntiFakeRequest,
    standard: f64,
) -> String {
    let size = request.nominal_size;
    match level {
        RiskLevel::Safe if diff_percent > 0.0 => format!(
            "Genuine: {} mm² roll is {:.1}% above the {} kg standard",
            size, diff_percent, standard
        ),
        RiskLevel::Safe => format!(
            "Genuine: {} mm² roll is within {}% of the {} kg standard",
            size,
            round1(thresholds.shortfall_percent(RiskLevel::Warning)),
            standard
        ),
        RiskLevel::Warning => format!(
            "Suspect non-standard wire: {} mm² roll is {:.1}% under the {} kg standard",
            size, -diff_percent, standard
        ),
        RiskLevel::Danger => format!(
            "High risk of copper-clad aluminium or undersized conductor: {} mm² roll is {:.1}% under the {} kg standard",
            size, -diff_percent, standard
        ),
    }
}
