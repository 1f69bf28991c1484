//! Cable Anti-Fake: Roll Weight Verification
//!
//! Weighs a 100 m roll against the reference mass for its nominal
//! cross-section. Copper is dense; rolls that come in light usually hide a
//! thinner conductor or copper-clad aluminium.
//!
//! # Example
//!
//! ```
//! use cable_antifake::check_roll;
//! use cable_core::{AntiFakeRequest, CableSize, RiskLevel};
//!
//! let request = AntiFakeRequest::new(CableSize::from_mm2(2.5), 2.5);
//! let result = check_roll(&request).unwrap();
//!
//! assert_eq!(result.risk_level, RiskLevel::Danger);
//! assert!(!result.is_pass);
//! ```

pub mod engine;
pub mod risk;

pub use engine::AntiFakeEngine;
pub use risk::RiskThresholds;

use cable_core::{AntiFakeRequest, AntiFakeResult, Result};
use cable_tables::ReferenceTables;

/// Check a roll against the built-in reference weights
pub fn check_roll(request: &AntiFakeRequest) -> Result<AntiFakeResult> {
    AntiFakeEngine::new(ReferenceTables::standard()).check(request)
}
