//! Nominal conductor cross-section
//!
//! Sizes travel as manufacturer labels (`"1.5"`, `"4.0"`, `"10"`) because that
//! is what the client sends and renders, but compare by their mm² value.

use crate::error::{CableError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const SIZE_EPSILON: f64 = 1e-9;

/// Nominal cross-section in mm²
#[derive(Debug, Clone, Copy)]
pub struct CableSize(f64);

impl CableSize {
    /// Create a size, rejecting non-finite and non-positive values
    pub fn new(mm2: f64) -> Result<Self> {
        if !mm2.is_finite() || mm2 <= 0.0 {
            return Err(CableError::validation(
                "size",
                format!("cross-section must be a positive number of mm², got {}", mm2),
            ));
        }
        Ok(Self(mm2))
    }

    /// Build a size from a value known to be positive (static tables)
    pub const fn from_mm2(mm2: f64) -> Self {
        Self(mm2)
    }

    pub fn mm2(&self) -> f64 {
        self.0
    }

    /// Manufacturer label: one decimal below 10 mm², integer from 10 mm² up
    pub fn label(&self) -> String {
        let v = self.0;
        if v.fract() == 0.0 {
            if v < 10.0 {
                format!("{:.1}", v)
            } else {
                format!("{:.0}", v)
            }
        } else {
            format!("{}", v)
        }
    }
}

impl PartialEq for CableSize {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < SIZE_EPSILON
    }
}

impl PartialOrd for CableSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl fmt::Display for CableSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for CableSize {
    type Err = CableError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: f64 = trimmed.parse().map_err(|_| {
            CableError::validation("size", format!("'{}' is not a cross-section in mm²", trimmed))
        })?;
        Self::new(value)
    }
}

impl Serialize for CableSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

struct CableSizeVisitor;

impl<'de> Visitor<'de> for CableSizeVisitor {
    type Value = CableSize;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a cross-section in mm² as a number or a label such as \"2.5\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<CableSize, E> {
        v.parse().map_err(|e: CableError| E::custom(e))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<CableSize, E> {
        CableSize::new(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<CableSize, E> {
        CableSize::new(v as f64).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<CableSize, E> {
        CableSize::new(v as f64).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for CableSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CableSizeVisitor)
    }
}
