//! Data Model: requests, results and the enums they are built from
use crate::size::CableSize;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// ENUMS
// ============================================================================

/// Unit the caller expressed the load in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUnit {
    Kw,
    Hp,
    Amps,
}

/// Nominal supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoltageType {
    /// 220 V single-phase
    #[serde(rename = "220v")]
    SinglePhase220,
    /// 380 V three-phase
    #[serde(rename = "380v")]
    ThreePhase380,
}

impl VoltageType {
    pub fn nominal_volts(&self) -> f64 {
        match self {
            VoltageType::SinglePhase220 => 220.0,
            VoltageType::ThreePhase380 => 380.0,
        }
    }

    pub fn is_three_phase(&self) -> bool {
        matches!(self, VoltageType::ThreePhase380)
    }
}

impl fmt::Display for VoltageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VoltageType::SinglePhase220 => write!(f, "220v"),
            VoltageType::ThreePhase380 => write!(f, "380v"),
        }
    }
}

/// Conductor material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Cu,
    Al,
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Material::Cu => write!(f, "cu"),
            Material::Al => write!(f, "al"),
        }
    }
}

/// Insulation family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CableType {
    /// Cross-linked polyethylene (XLPE) power cable
    #[default]
    Yjv,
    /// General-purpose PVC building wire, single core
    Bv,
}

impl fmt::Display for CableType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CableType::Yjv => write!(f, "yjv"),
            CableType::Bv => write!(f, "bv"),
        }
    }
}

/// Anti-fake risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Warning,
    Danger,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "safe"),
            RiskLevel::Warning => write!(f, "warning"),
            RiskLevel::Danger => write!(f, "danger"),
        }
    }
}

/// Which constraint fixed the recommended size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoverningConstraint {
    /// Base ampacity alone
    Ampacity,
    /// Ampacity after temperature derating
    Derating,
    /// Upsized to keep voltage drop within the limit
    VoltageDrop,
    /// Upsized so a standard breaker fits between load and cable rating
    BreakerCoordination,
}

// ============================================================================
// BREAKER RATING
// ============================================================================

/// Rated trip current of a standard MCB, serialized as `"25A"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BreakerRating(pub u32);

impl BreakerRating {
    pub fn amps(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BreakerRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}A", self.0)
    }
}

impl Serialize for BreakerRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BreakerRatingVisitor;

impl<'de> Visitor<'de> for BreakerRatingVisitor {
    type Value = BreakerRating;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a breaker rating such as \"25A\" or 25")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BreakerRating, E> {
        let digits = v.trim().trim_end_matches(['A', 'a']).trim();
        digits
            .parse::<u32>()
            .map(BreakerRating)
            .map_err(|_| E::custom(format!("invalid breaker rating '{}'", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BreakerRating, E> {
        u32::try_from(v)
            .map(BreakerRating)
            .map_err(|_| E::custom(format!("breaker rating {} out of range", v)))
    }
}

impl<'de> Deserialize<'de> for BreakerRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BreakerRatingVisitor)
    }
}

// ============================================================================
// SIZING
// ============================================================================

fn default_temperature() -> f64 {
    40.0
}

fn default_max_voltage_drop() -> f64 {
    5.0
}

/// Load parameters for a sizing calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    /// Load magnitude in `power_unit`
    pub power: f64,
    pub power_unit: PowerUnit,
    pub voltage_type: VoltageType,
    /// One-way run length in metres
    pub distance: f64,
    #[serde(default)]
    pub material: Material,
    #[serde(default)]
    pub cable_type: CableType,
    /// Ambient temperature in °C
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum allowed voltage drop in percent
    #[serde(default = "default_max_voltage_drop")]
    pub max_voltage_drop: f64,
}

impl SizingRequest {
    /// Request with the client defaults for material, insulation, temperature and drop
    pub fn new(
        power: f64,
        power_unit: PowerUnit,
        voltage_type: VoltageType,
        distance: f64,
    ) -> Self {
        Self {
            power,
            power_unit,
            voltage_type,
            distance,
            material: Material::default(),
            cable_type: CableType::default(),
            temperature: default_temperature(),
            max_voltage_drop: default_max_voltage_drop(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_cable_type(mut self, cable_type: CableType) -> Self {
        self.cable_type = cable_type;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_voltage_drop(mut self, max_voltage_drop: f64) -> Self {
        self.max_voltage_drop = max_voltage_drop;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }
}

/// Outcome of a sizing calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub recommended_size: CableSize,
    /// Load current in amps, one decimal
    pub current_amps: f64,
    /// Derated ampacity of the recommended size, one decimal
    pub safe_ampacity: f64,
    pub mcb_rating: BreakerRating,
    /// Voltage drop of the recommended size in percent, one decimal
    pub voltage_drop_percent: f64,
    pub selection_reason: String,
    pub governed_by: GoverningConstraint,
    /// Published sizes skipped past the first ampacity-conforming one
    pub upsize_steps: u32,
}

// ============================================================================
// ANTI-FAKE
// ============================================================================

fn default_roll_type() -> CableType {
    CableType::Bv
}

/// A weighed 100 m roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiFakeRequest {
    pub nominal_size: CableSize,
    /// Measured roll weight in kg, packaging removed
    pub measured_weight: f64,
    /// Single-core BV wire is the only roll type with reference weights
    #[serde(default = "default_roll_type")]
    pub cable_type: CableType,
}

impl AntiFakeRequest {
    pub fn new(nominal_size: CableSize, measured_weight: f64) -> Self {
        Self {
            nominal_size,
            measured_weight,
            cable_type: default_roll_type(),
        }
    }
}

/// Outcome of a weight check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiFakeResult {
    pub risk_level: RiskLevel,
    /// Reference weight of a 100 m roll in kg
    pub standard_weight: f64,
    /// Signed deviation from the reference weight in percent, one decimal
    pub diff_percent: f64,
    pub is_pass: bool,
    pub message: String,
}
