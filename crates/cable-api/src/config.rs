//! Service configuration from the environment
use cable_core::Result;
use cable_tables::ReferenceTables;
use std::path::PathBuf;

/// Listen address the mobile client targets
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// `CABLE_ADDR`
    pub addr: String,
    /// `CABLE_TABLES`: YAML reference tables replacing the built-in ones
    pub tables_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            tables_path: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        Self {
            addr: get("CABLE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            tables_path: get("CABLE_TABLES").map(PathBuf::from),
        }
    }

    /// Reference tables to serve: the configured file, or the built-in set
    pub fn tables(&self) -> Result<ReferenceTables> {
        match &self.tables_path {
            Some(path) => ReferenceTables::load(path),
            None => Ok(ReferenceTables::standard().clone()),
        }
    }
}
