//! Cable Core: Data Model and Error Taxonomy
//!
//! Shared value types for the sizing and anti-fake engines. Every request and
//! result here is a plain value; nothing holds shared mutable state.

pub mod data_model;
pub mod error;
pub mod size;

pub use data_model::{
    AntiFakeRequest, AntiFakeResult, BreakerRating, CableType, GoverningConstraint, Material,
    PowerUnit, RiskLevel, SizingRequest, SizingResult, VoltageType,
};
pub use error::{CableError, ErrorKind, Result};
pub use size::CableSize;

/// Round to one decimal place for presentation.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
