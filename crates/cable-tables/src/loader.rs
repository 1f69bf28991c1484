//! YAML reference-table files
use crate::ReferenceTables;
use cable_core::{CableError, Result};
use std::path::Path;

impl ReferenceTables {
    /// Parse and validate a table set
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let tables: ReferenceTables = serde_yaml::from_str(yaml)
            .map_err(|e| CableError::Config(format!("reference tables: {}", e)))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load a table set from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| CableError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let tables = Self::from_yaml(&yaml)?;
        tracing::info!(
            path = %path.display(),
            tables = tables.conductors.len(),
            sizes = tables.published_sizes().len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| CableError::Config(e.to_string()))
    }
}
