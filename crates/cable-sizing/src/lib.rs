//! Cable Sizing: Conductor and Breaker Selection
//!
//! Turns a load description into a recommended conductor cross-section, the
//! breaker that protects it and the resulting voltage drop.
//!
//! ```text
//! load → current → derated ampacity → breaker window → voltage drop → size
//!                        ↓                  ↓                ↓
//!                   first candidate     upsize if none   upsize if over limit
//! ```
//!
//! # Example
//!
//! ```
//! use cable_core::{PowerUnit, SizingRequest, VoltageType};
//! use cable_sizing::calculate_sizing;
//!
//! let request = SizingRequest::new(5.0, PowerUnit::Kw, VoltageType::SinglePhase220, 50.0);
//! let result = calculate_sizing(&request).unwrap();
//!
//! assert_eq!(result.recommended_size.label(), "4.0");
//! assert_eq!(result.mcb_rating.to_string(), "25A");
//! ```

pub mod breaker;
pub mod current;
pub mod engine;
pub mod voltage_drop;

pub use breaker::select_breaker;
pub use current::{load_current, WATTS_PER_HP};
pub use engine::SizingEngine;
pub use voltage_drop::{resistivity, voltage_drop_percent};

use cable_core::{Result, SizingRequest, SizingResult};
use cable_tables::ReferenceTables;

/// Size against the built-in reference tables
pub fn calculate_sizing(request: &SizingRequest) -> Result<SizingResult> {
    SizingEngine::new(ReferenceTables::standard()).size(request)
}
